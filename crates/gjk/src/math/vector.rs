use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};

use super::FloatNum;

/// immutable 2d vector, every operation creates a new vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    x: FloatNum,
    y: FloatNum,
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("{{ x: {}, y: {} }}", self.x, self.y))
    }
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0., 0.);

    #[inline]
    pub const fn new(x: FloatNum, y: FloatNum) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> FloatNum {
        self.x
    }

    #[inline]
    pub fn y(&self) -> FloatNum {
        self.y
    }

    #[inline]
    pub fn add(&self, vector: &Vector) -> Vector {
        (self.x + vector.x, self.y + vector.y).into()
    }

    #[inline]
    pub fn sub(&self, vector: &Vector) -> Vector {
        (self.x - vector.x, self.y - vector.y).into()
    }

    #[inline]
    pub fn dot(&self, vector: &Vector) -> FloatNum {
        self.x * vector.x + self.y * vector.y
    }

    #[inline]
    pub fn invert(&self) -> Vector {
        (-self.x, -self.y).into()
    }

    /// rotate clockwise by a right angle, (x, y) -> (y, -x)
    #[inline]
    pub fn perpendicular(&self) -> Vector {
        (self.y, -self.x).into()
    }

    #[inline]
    pub fn abs(&self) -> FloatNum {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0. && self.y == 0.
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(FloatNum, FloatNum)> for Vector {
    fn from((x, y): (FloatNum, FloatNum)) -> Self {
        Self { x, y }
    }
}

impl From<[FloatNum; 2]> for Vector {
    fn from([x, y]: [FloatNum; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vector> for (FloatNum, FloatNum) {
    fn from(vector: Vector) -> Self {
        (vector.x, vector.y)
    }
}

impl Add<Vector> for Vector {
    type Output = Self;
    fn add(self, rhs: Vector) -> Self::Output {
        Vector::add(&self, &rhs)
    }
}

impl Add<&Vector> for Vector {
    type Output = Self;
    fn add(self, rhs: &Vector) -> Self::Output {
        Vector::add(&self, rhs)
    }
}

impl AddAssign<Vector> for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl AddAssign<&Vector> for Vector {
    fn add_assign(&mut self, rhs: &Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vector> for Vector {
    type Output = Self;
    fn sub(self, rhs: Vector) -> Self::Output {
        Vector::sub(&self, &rhs)
    }
}

impl Sub<&Vector> for Vector {
    type Output = Self;
    fn sub(self, rhs: &Vector) -> Self::Output {
        Vector::sub(&self, rhs)
    }
}

impl SubAssign<Vector> for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

// dot product
impl Mul<Vector> for Vector {
    type Output = FloatNum;
    fn mul(self, rhs: Vector) -> Self::Output {
        self.dot(&rhs)
    }
}

impl Mul<FloatNum> for Vector {
    type Output = Vector;
    fn mul(self, rhs: FloatNum) -> Self::Output {
        (self.x * rhs, self.y * rhs).into()
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.invert()
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;

    #[test]
    fn test_arithmetic() {
        let a: Vector = (1., 2.).into();
        let b: Vector = (3., -4.).into();

        assert_eq!(a + b, (4., -2.).into());
        assert_eq!(a - b, (-2., 6.).into());
        assert_eq!(a * b, -5.);
        assert_eq!(-a, (-1., -2.).into());
        assert_eq!(a.add(&b), a + b);
        assert_eq!(a.sub(&b), a - b);
        assert_eq!(a.dot(&b), a * b);
    }

    #[test]
    fn test_operations_do_not_mutate() {
        let a = Vector::new(5., 7.);
        let _ = a.invert();
        let _ = a.add(&Vector::new(1., 1.));
        assert_eq!(a, Vector::new(5., 7.));
    }

    #[test]
    fn test_perpendicular() {
        let v = Vector::new(2., 3.);
        let perp = v.perpendicular();

        assert_eq!(perp, Vector::new(3., -2.));
        assert_eq!(perp * v, 0.);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector::new(1., -0.5).to_string(), "{ x: 1, y: -0.5 }");
    }
}
