use gjk_macro_tools::Fields;
use log::{debug, trace, warn};

use crate::{config::GjkConfig, math::vector::Vector, shape::Shape};

pub mod simplex;

pub use simplex::Simplex;

/// Evidence that two shapes intersect. It only remembers which shapes collided.
#[derive(Fields)]
#[r(copy)]
pub struct Collision<'a, A: ?Sized, B: ?Sized> {
    a: &'a A,
    b: &'a B,
}

impl<'a, A: ?Sized, B: ?Sized> Clone for Collision<'a, A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A: ?Sized, B: ?Sized> Copy for Collision<'a, A, B> {}

impl<'a, A: ?Sized, B: ?Sized> std::fmt::Debug for Collision<'a, A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collision")
            .field("a", &(self.a as *const A as *const ()))
            .field("b", &(self.b as *const B as *const ()))
            .finish()
    }
}

/// how a gjk run ended
pub enum GjkOutcome<'a, A: ?Sized, B: ?Sized> {
    /// the simplex enclosed the origin
    Collision(Collision<'a, A, B>),
    /// a support point failed to pass the origin, the shapes are disjoint
    Separated,
    /// the search gave up after `iterations` support queries, only malformed shapes get here
    IterationLimit { iterations: usize },
}

impl<'a, A: ?Sized, B: ?Sized> Clone for GjkOutcome<'a, A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A: ?Sized, B: ?Sized> Copy for GjkOutcome<'a, A, B> {}

impl<'a, A: ?Sized, B: ?Sized> std::fmt::Debug for GjkOutcome<'a, A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GjkOutcome::Collision(collision) => f.debug_tuple("Collision").field(collision).finish(),
            GjkOutcome::Separated => f.write_str("Separated"),
            GjkOutcome::IterationLimit { iterations } => f
                .debug_struct("IterationLimit")
                .field("iterations", iterations)
                .finish(),
        }
    }
}

impl<'a, A: ?Sized, B: ?Sized> GjkOutcome<'a, A, B> {
    #[inline]
    pub fn is_collision(&self) -> bool {
        matches!(self, GjkOutcome::Collision(_))
    }

    pub fn collision(self) -> Option<Collision<'a, A, B>> {
        match self {
            GjkOutcome::Collision(collision) => Some(collision),
            _ => None,
        }
    }
}

/// point on the boundary of the minkowski difference `a - b` farthest along `direction`
pub fn support<A, B>(a: &A, b: &B, direction: &Vector) -> Vector
where
    A: Shape + ?Sized,
    B: Shape + ?Sized,
{
    let farthest_a = a.farthest_point_in_direction(direction);
    let farthest_b = b.farthest_point_in_direction(&direction.invert());
    farthest_a.sub(&farthest_b)
}

/// Determine whether two convex shapes intersect.
///
/// Returns the collision when they do. A search stopped by the iteration limit is reported
/// as no collision, use [`calculate_with`] to tell the two apart.
pub fn calculate<'a, A, B>(a: &'a A, b: &'a B) -> Option<Collision<'a, A, B>>
where
    A: Shape + ?Sized,
    B: Shape + ?Sized,
{
    calculate_with(a, b, &GjkConfig::default()).collision()
}

// https://youtu.be/ajv46BSqcK4 gjk algo explain
pub fn calculate_with<'a, A, B>(a: &'a A, b: &'a B, config: &GjkConfig) -> GjkOutcome<'a, A, B>
where
    A: Shape + ?Sized,
    B: Shape + ?Sized,
{
    let mut simplex = Simplex::new();

    let mut direction = config.effective_initial_direction();

    simplex.add(support(a, b, &direction));

    // search the opposite side next
    direction = direction.invert();

    let max_iterations = config.max_iterations();
    let mut iterations = 0;

    loop {
        if iterations >= max_iterations {
            warn!(
                "gjk gave up after {} iterations, simplex {}",
                iterations, simplex
            );
            return GjkOutcome::IterationLimit { iterations };
        }
        iterations += 1;

        let support_point = support(a, b, &direction);

        trace!(
            "gjk iteration {}: direction {}, support point {}, simplex {}",
            iterations,
            direction,
            support_point,
            simplex
        );

        // the minkowski difference does not reach past the origin along direction
        if support_point.dot(&direction) <= 0. {
            debug!("gjk separated after {} iterations", iterations);
            return GjkOutcome::Separated;
        }

        simplex.add(support_point);

        match simplex.calculate_direction() {
            Some(next_direction) => direction = next_direction,
            None => {
                debug!("gjk collision after {} iterations", iterations);
                return GjkOutcome::Collision(Collision { a, b });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{calculate, calculate_with, support, GjkOutcome};
    use crate::{config::GjkConfigBuilder, shape::Polygon};

    #[test]
    fn test_support_point() {
        let a = Polygon::rectangle((2., 3.), 1., 2.);
        let b = Polygon::rectangle((1., 3.), 2., 2.);

        // a's top-left minus b's bottom-right
        assert_eq!(support(&a, &b, &(0., 1.).into()), (-0.5, 2.).into());
    }

    #[test]
    fn test_collision_refers_to_inputs() {
        let a = Polygon::rectangle((0., 0.), 2., 2.);
        let b = Polygon::rectangle((1., 0.), 2., 2.);

        let collision = calculate(&a, &b).unwrap();

        assert!(std::ptr::eq(collision.a(), &a));
        assert!(std::ptr::eq(collision.b(), &b));
    }

    #[test]
    fn test_custom_initial_direction() {
        let a = Polygon::rectangle((0., 0.), 2., 2.);
        let b = Polygon::rectangle((5., 0.), 2., 2.);
        let config = GjkConfigBuilder::new().initial_direction((1., 0.)).build();

        assert!(matches!(
            calculate_with(&a, &b, &config),
            GjkOutcome::Separated
        ));
    }

    #[test]
    fn test_iteration_limit() {
        let a: Polygon = [(0., 1.), (1., -2.), (-1., -1.)].into_iter().collect();
        let b: Polygon = [(0., -1.), (1., 1.), (-1., 1.)].into_iter().collect();

        // the second iteration would enclose the origin
        let config = GjkConfigBuilder::new().max_iterations(1_usize).build();
        let outcome = calculate_with(&a, &b, &config);

        assert!(matches!(
            outcome,
            GjkOutcome::IterationLimit { iterations: 1 }
        ));
        assert!(!outcome.is_collision());

        let config = GjkConfigBuilder::new().max_iterations(2_usize).build();
        assert!(calculate_with(&a, &b, &config).is_collision());
    }

    #[test]
    fn test_zero_iterations_gives_up_immediately() {
        let a = Polygon::rectangle((0., 0.), 2., 2.);
        let config = GjkConfigBuilder::new().max_iterations(0_usize).build();

        assert!(matches!(
            calculate_with(&a, &a, &config),
            GjkOutcome::IterationLimit { iterations: 0 }
        ));
    }
}
