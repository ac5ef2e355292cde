use gjk::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn triangle_a() -> Polygon {
    [(0., 1.), (1., -2.), (-1., -1.)].into_iter().collect()
}

fn triangle_b() -> Polygon {
    [(0., -1.), (1., 1.), (-1., 1.)].into_iter().collect()
}

fn collides(a: &dyn Shape, b: &dyn Shape) -> bool {
    calculate(a, b).is_some()
}

#[test]
fn test_overlapping_triangles() {
    let a = triangle_a();
    let b = triangle_b();

    assert!(collides(&a, &b));
    assert!(collides(&b, &a));
}

#[test]
fn test_self_intersection() {
    let a = triangle_a();
    assert!(collides(&a, &a));

    let rect = Polygon::rectangle((-4., 7.), 3., 0.5);
    assert!(collides(&rect, &rect));

    let circle = Circle::new((1., 1.), 2.);
    assert!(collides(&circle, &circle));
}

#[test]
fn test_overlapping_rectangles() {
    let a = Polygon::rectangle((2., 3.), 1., 2.);
    let b = Polygon::rectangle((1., 3.), 2., 2.);

    assert!(collides(&a, &b));
    assert!(collides(&b, &a));
}

#[test]
fn test_disjoint_rectangles() {
    let a = Polygon::rectangle((2., 3.), 1., 2.);
    let b = Polygon::rectangle((10., 3.), 2., 2.);

    assert!(!collides(&a, &b));
    assert!(!collides(&b, &a));

    assert!(matches!(
        calculate_with(&a, &b, &GjkConfig::default()),
        GjkOutcome::Separated
    ));
}

#[test]
fn test_triangle_and_circle() {
    let a = triangle_a();
    let near = Circle::new((0., 1.), 2.);
    let far = Circle::new((0., 100.), 2.);

    assert!(collides(&a, &near));
    assert!(collides(&near, &a));
    assert!(!collides(&a, &far));
    assert!(!collides(&far, &a));
}

#[test]
fn test_gap_along_each_axis() {
    let a = Polygon::rectangle((0., 0.), 2., 2.);

    for offset in [(2.5, 0.), (-2.5, 0.), (0., 2.5), (0., -2.5), (2.1, 2.1)] {
        let b = Polygon::rectangle(offset, 2., 2.);
        assert!(!collides(&a, &b), "gap at {offset:?}");
        assert!(!collides(&b, &a), "gap at {offset:?}");
    }
}

#[test]
fn test_touching_is_deterministic() {
    let a = Polygon::rectangle((0., 0.), 2., 2.);

    for offset in [(2., 0.), (0., 2.), (-2., 0.), (0., -2.), (2., 2.)] {
        let b = Polygon::rectangle(offset, 2., 2.);
        let first = collides(&a, &b);
        for _ in 0..8 {
            assert_eq!(collides(&a, &b), first, "touching at {offset:?}");
        }
    }
}

#[test]
fn test_touching_edges() {
    let a = Polygon::rectangle((0., 0.), 2., 2.);

    // the origin sits on the boundary of the minkowski difference, the answer depends on
    // which side of it the search approaches from
    let right = Polygon::rectangle((2., 0.), 2., 2.);
    assert!(collides(&a, &right));
    assert!(collides(&right, &a));

    let above = Polygon::rectangle((0., 2.), 2., 2.);
    assert!(collides(&a, &above));
    assert!(!collides(&above, &a));
}

#[test]
fn test_idempotence() {
    let a = triangle_a();
    let b = triangle_b();
    let c = Circle::new((0., 100.), 2.);

    for _ in 0..16 {
        assert!(collides(&a, &b));
        assert!(!collides(&a, &c));
    }
}

#[test]
fn test_translation_invariance() {
    let mut a = triangle_a();
    let mut b = triangle_b();
    let mut c = Circle::new((0., 1.), 2.);
    let mut d = Polygon::rectangle((10., 3.), 2., 2.);

    let offset: Vector = (-123.25, 47.5).into();
    for shape in [&mut a, &mut b, &mut d] {
        shape.translate(&offset);
    }
    c.translate(&offset);

    assert!(collides(&a, &b));
    assert!(collides(&a, &c));
    assert!(!collides(&a, &d));
}

#[test]
fn test_boxed_and_any_shapes() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(triangle_a()),
        Box::new(triangle_b()),
        Box::new(Circle::new((0., 100.), 2.)),
    ];

    assert!(calculate(&shapes[0], &shapes[1]).is_some());
    assert!(calculate(&shapes[0], &shapes[2]).is_none());

    let a: AnyShape = triangle_a().into();
    let b: AnyShape = Circle::new((0., 1.), 2.).into();
    assert!(calculate(&a, &b).is_some());
}

#[test]
fn test_empty_polygon_is_a_point_at_origin() {
    let empty = Polygon::default();
    let around_origin = Polygon::rectangle((0., 0.), 2., 2.);
    let elsewhere = Polygon::rectangle((5., 5.), 2., 2.);

    assert!(collides(&empty, &around_origin));
    assert!(!collides(&empty, &elsewhere));
}

#[derive(Debug, Clone, Copy)]
enum Sample {
    Rect { center: (f64, f64), width: f64, height: f64 },
    Circle { center: (f64, f64), radius: f64 },
}

impl Sample {
    fn random(rng: &mut StdRng) -> Self {
        let center = (rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0));
        if rng.gen_bool(0.5) {
            Sample::Rect {
                center,
                width: rng.gen_range(0.5..8.0),
                height: rng.gen_range(0.5..8.0),
            }
        } else {
            Sample::Circle {
                center,
                radius: rng.gen_range(0.5..5.0),
            }
        }
    }

    fn build(&self, offset: Vector) -> AnyShape {
        let mut shape: AnyShape = match *self {
            Sample::Rect {
                center,
                width,
                height,
            } => Polygon::rectangle(center, width, height).into(),
            Sample::Circle { center, radius } => Circle::new(center, radius).into(),
        };
        shape.translate(&offset);
        shape
    }
}

// signed gap between two samples, negative when they overlap
fn gap(a: Sample, b: Sample) -> f64 {
    match (a, b) {
        (
            Sample::Rect {
                center: ca,
                width: wa,
                height: ha,
            },
            Sample::Rect {
                center: cb,
                width: wb,
                height: hb,
            },
        ) => {
            let dx = (ca.0 - cb.0).abs() - (wa + wb) * 0.5;
            let dy = (ca.1 - cb.1).abs() - (ha + hb) * 0.5;
            dx.max(dy)
        }
        (
            Sample::Circle {
                center: ca,
                radius: ra,
            },
            Sample::Circle {
                center: cb,
                radius: rb,
            },
        ) => (ca.0 - cb.0).hypot(ca.1 - cb.1) - ra - rb,
        (
            Sample::Rect {
                center,
                width,
                height,
            },
            Sample::Circle {
                center: cc,
                radius,
            },
        )
        | (
            Sample::Circle {
                center: cc,
                radius,
            },
            Sample::Rect {
                center,
                width,
                height,
            },
        ) => {
            let qx = ((cc.0 - center.0).abs() - width * 0.5).max(0.);
            let qy = ((cc.1 - center.1).abs() - height * 0.5).max(0.);
            if qx == 0. && qy == 0. {
                -radius
            } else {
                qx.hypot(qy) - radius
            }
        }
    }
}

#[test]
fn test_random_shapes_agree_with_exact_answer() {
    let mut rng = StdRng::seed_from_u64(0x6a6b);
    let mut checked = 0;

    while checked < 2000 {
        let a = Sample::random(&mut rng);
        let b = Sample::random(&mut rng);

        let gap = gap(a, b);
        // keep clear of touching configurations
        if gap.abs() < 0.1 {
            continue;
        }
        checked += 1;

        let expected = gap < 0.;
        let offset: Vector = (rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)).into();

        let shape_a = a.build(Vector::ZERO);
        let shape_b = b.build(Vector::ZERO);
        let moved_a = a.build(offset);
        let moved_b = b.build(offset);

        let config = GjkConfig::default();
        let forward = calculate_with(&shape_a, &shape_b, &config);
        let backward = calculate_with(&shape_b, &shape_a, &config);
        let moved = calculate_with(&moved_a, &moved_b, &config);

        for outcome in [forward, backward, moved] {
            assert!(
                !matches!(outcome, GjkOutcome::IterationLimit { .. }),
                "{a:?} {b:?} hit the iteration limit"
            );
            assert_eq!(outcome.is_collision(), expected, "{a:?} {b:?} offset {offset}");
        }
    }
}

#[test]
fn test_concurrent_runs() {
    let a = triangle_a();
    let b = triangle_b();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| calculate(&a, &b).is_some()))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}
