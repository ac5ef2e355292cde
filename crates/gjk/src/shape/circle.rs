use std::fmt::Display;

use crate::{
    error::{GjkError, GjkResult},
    math::{vector::Vector, FloatNum},
};

use super::{ensure_finite, Shape};

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: Vector,
    radius: FloatNum,
}

impl<P: Into<Vector>> From<(P, FloatNum)> for Circle {
    fn from((center, radius): (P, FloatNum)) -> Self {
        Self::new(center, radius)
    }
}

impl Circle {
    #[inline]
    pub fn new(center: impl Into<Vector>, radius: FloatNum) -> Self {
        Self {
            center: center.into(),
            radius,
        }
    }

    /// same as [`Circle::new`] but rejects a negative or non finite radius and a non finite center
    pub fn try_new(center: impl Into<Vector>, radius: FloatNum) -> GjkResult<Self> {
        let center = center.into();
        ensure_finite(&center, "circle center")?;
        if !radius.is_finite() || radius < 0. {
            return Err(GjkError::InvalidShape(format!(
                "circle radius {radius} must be finite and not negative"
            )));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Vector {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> FloatNum {
        self.radius
    }

    #[inline]
    pub fn translate(&mut self, vector: &Vector) {
        self.center += vector;
    }
}

impl Shape for Circle {
    fn farthest_point_in_direction(&self, direction: &Vector) -> Vector {
        // atan2(0, 0) is 0, so a zero direction picks the rightmost point
        let angle = direction.y().atan2(direction.x());
        let offset = Vector::new(angle.cos(), angle.sin()) * self.radius;
        self.center + offset
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!(
            "Circle {{ center: {}, radius: {} }}",
            self.center, self.radius
        ))
    }
}
