use std::fmt::Display;

use crate::math::vector::Vector;

pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

/// anything that can answer which of its points lies farthest along a direction
///
/// implementations must be deterministic for a given shape state and must never fail,
/// a shape without points answers with a fixed fallback point
pub trait Shape {
    fn farthest_point_in_direction(&self, direction: &Vector) -> Vector;
}

impl<T: Shape + ?Sized> Shape for &T {
    fn farthest_point_in_direction(&self, direction: &Vector) -> Vector {
        (**self).farthest_point_in_direction(direction)
    }
}

impl<T: Shape + ?Sized> Shape for Box<T> {
    fn farthest_point_in_direction(&self, direction: &Vector) -> Vector {
        (**self).farthest_point_in_direction(direction)
    }
}

/// closed set of the shapes this crate ships with, used when shapes come from data
#[derive(Clone, Debug, PartialEq)]
pub enum AnyShape {
    Polygon(Polygon),
    Circle(Circle),
}

impl AnyShape {
    pub fn translate(&mut self, vector: &Vector) {
        match self {
            AnyShape::Polygon(polygon) => polygon.translate(vector),
            AnyShape::Circle(circle) => circle.translate(vector),
        }
    }
}

impl Shape for AnyShape {
    fn farthest_point_in_direction(&self, direction: &Vector) -> Vector {
        match self {
            AnyShape::Polygon(polygon) => polygon.farthest_point_in_direction(direction),
            AnyShape::Circle(circle) => circle.farthest_point_in_direction(direction),
        }
    }
}

impl Display for AnyShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyShape::Polygon(polygon) => polygon.fmt(f),
            AnyShape::Circle(circle) => circle.fmt(f),
        }
    }
}

impl From<Polygon> for AnyShape {
    fn from(polygon: Polygon) -> Self {
        AnyShape::Polygon(polygon)
    }
}

impl From<Circle> for AnyShape {
    fn from(circle: Circle) -> Self {
        AnyShape::Circle(circle)
    }
}

pub(crate) fn ensure_finite(point: &Vector, what: &str) -> crate::error::GjkResult<()> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(crate::error::GjkError::InvalidShape(format!(
            "{what} {point} is not finite"
        )))
    }
}
