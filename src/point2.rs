use core::ops::{Add, Div, Mul, Neg, Sub};

use super::Scalar;

/// A point (or free vector) in the plane.
/// Equality is exact coordinate equality, which is what duplicate filtering
/// and the anchor continuity between fitted segments rely on.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T>
where
    T: Scalar,
{
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// Dot product of self and other interpreted as vectors
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    pub fn squared_norm(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Interprets the Point2 as a vector and returns its norm (distance from origin)
    pub fn norm(&self) -> T {
        self.squared_norm().sqrt()
    }

    pub fn squared_distance(&self, other: Self) -> T {
        (*self - other).squared_norm()
    }

    /// Returns the distance between self and other
    pub fn distance(&self, other: Self) -> T {
        (*self - other).norm()
    }

    /// Returns the unit vector pointing in the same direction.
    /// The zero vector has no direction and yields NaN components.
    pub fn normalize(&self) -> Self {
        *self / self.norm()
    }

    /// Rotate by +90 degrees: (x, y) -> (-y, x)
    pub fn perp(&self) -> Self {
        Point2 {
            x: -self.y,
            y: self.x,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Neg for Point2<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Point2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Scale by a scalar. Only `point * scalar` is provided, the scalar always goes on the right.
impl<T> Mul<T> for Point2<T>
where
    T: Mul<T, Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Div<T> for Point2<T>
where
    T: Div<T, Output = T> + Copy,
{
    type Output = Point2<T>;

    fn div(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl<T> From<[T; 2]> for Point2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<Point2<T>> for [T; 2] {
    fn from(p: Point2<T>) -> Self {
        [p.x, p.y]
    }
}
