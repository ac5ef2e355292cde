use std::fmt::{Display, Write};

use gjk_macro_tools::Deref;

use crate::{
    error::GjkResult,
    math::{vector::Vector, FloatNum},
};

use super::{ensure_finite, Shape};

/// convex polygon described by its vertices
///
/// the vertices are not checked for convexity, a concave vertex list behaves like its convex hull
#[derive(Clone, Debug, Default, PartialEq, Deref)]
pub struct Polygon {
    #[deref]
    vertices: Vec<Vector>,
}

impl Polygon {
    pub fn new(vertices: impl Into<Vec<Vector>>) -> Self {
        Self {
            vertices: vertices.into(),
        }
    }

    /// same as [`Polygon::new`] but rejects vertices that are NaN or infinite
    pub fn try_new(vertices: impl Into<Vec<Vector>>) -> GjkResult<Self> {
        let vertices = vertices.into();
        for vertex in vertices.iter() {
            ensure_finite(vertex, "polygon vertex")?;
        }
        Ok(Self { vertices })
    }

    /// axis aligned rectangle, vertices go top-left, top-right, bottom-right, bottom-left
    pub fn rectangle(center: impl Into<Vector>, width: FloatNum, height: FloatNum) -> Self {
        let center: Vector = center.into();
        let half_width = width * 0.5;
        let half_height = height * 0.5;

        let (x, y) = (center.x(), center.y());

        Self::new([
            Vector::new(x - half_width, y + half_height),
            Vector::new(x + half_width, y + half_height),
            Vector::new(x + half_width, y - half_height),
            Vector::new(x - half_width, y - half_height),
        ])
    }

    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    pub fn translate(&mut self, vector: &Vector) {
        self.vertices.iter_mut().for_each(|vertex| *vertex += vector);
    }
}

impl Shape for Polygon {
    fn farthest_point_in_direction(&self, direction: &Vector) -> Vector {
        let mut farthest_distance = FloatNum::NEG_INFINITY;
        // empty polygon answers with the origin
        let mut farthest_point = Vector::ZERO;

        for vertex in self.vertices.iter() {
            let distance = vertex.dot(direction);
            if distance > farthest_distance {
                farthest_distance = distance;
                farthest_point = *vertex;
            }
        }

        farthest_point
    }
}

impl From<Vec<Vector>> for Polygon {
    fn from(vertices: Vec<Vector>) -> Self {
        Self::new(vertices)
    }
}

impl<P: Into<Vector>> FromIterator<P> for Polygon {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect::<Vec<_>>())
    }
}

impl Display for Polygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Polygon [")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            f.write_str(&vertex.to_string())?;
        }
        f.write_char(']')
    }
}
