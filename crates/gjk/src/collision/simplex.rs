use std::fmt::{Display, Write};

use crate::math::vector::Vector;

const CAPACITY: usize = 3;

/// the point, segment or triangle built from support points while searching for the origin
///
/// index 0 holds the oldest surviving point, the last index holds the newest one
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    points: [Vector; CAPACITY],
    len: usize,
}

impl Simplex {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn points(&self) -> &[Vector] {
        &self.points[..self.len]
    }

    /// append the newest point, the caller keeps at most two points before adding
    pub fn add(&mut self, point: Vector) {
        debug_assert!(self.len < CAPACITY, "simplex is full");
        self.points[self.len] = point;
        self.len += 1;
    }

    fn remove(&mut self, index: usize) {
        debug_assert!(index < self.len);
        for i in index..(self.len - 1) {
            self.points[i] = self.points[i + 1];
        }
        self.len -= 1;
    }

    /// Check whether the origin is enclosed, if not, return the direction to search next.
    ///
    /// A triangle that leaves the origin outside one of the edges touching the newest point
    /// drops the vertex opposite to that edge, so the simplex is a segment again afterwards.
    /// `None` means the triangle encloses the origin.
    pub fn calculate_direction(&mut self) -> Option<Vector> {
        let a = *self.points().last()?;
        // a is the newest support point, the origin seen from a
        let ao = a.invert();

        match self.len {
            1 => Some(ao),
            2 => {
                let b = self.points[0];
                let ab = b.sub(&a);

                let mut ab_perp = ab.perpendicular();
                // face toward the origin
                if ab_perp.dot(&ao) <= 0. {
                    ab_perp = ab_perp.invert();
                }

                Some(ab_perp)
            }
            _ => {
                let c = self.points[0];
                let b = self.points[1];

                let ab = b.sub(&a);
                let ac = c.sub(&a);

                let mut ab_perp = ab.perpendicular();
                // face away from the triangle
                if ab_perp.dot(&c) >= 0. {
                    ab_perp = ab_perp.invert();
                }

                // origin lies beyond edge ab, c is useless now
                if ab_perp.dot(&ao) > 0. {
                    self.remove(0);
                    return Some(ab_perp);
                }

                let mut ac_perp = ac.perpendicular();
                if ac_perp.dot(&b) >= 0. {
                    ac_perp = ac_perp.invert();
                }

                // origin lies beyond edge ac, drop b
                if ac_perp.dot(&ao) > 0. {
                    self.remove(1);
                    return Some(ac_perp);
                }

                None
            }
        }
    }
}

impl Display for Simplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('[')?;
        for (i, point) in self.points().iter().enumerate() {
            if i != 0 {
                f.write_char(',')?;
            }
            f.write_str(&point.to_string())?;
        }
        f.write_char(']')
    }
}
