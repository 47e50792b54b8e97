use super::line::LineSegment;
use super::point2::Point2;
use super::{scalar, Scalar};

/// A 2d quadratic Bezier curve defined by a start point, one control point and an end point.
/// In this crate it mostly appears as the hodograph (first derivative) of a `CubicBezier`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticBezier<T> {
    pub(crate) start: Point2<T>,
    pub(crate) ctrl: Point2<T>,
    pub(crate) end: Point2<T>,
}

impl<T> QuadraticBezier<T>
where
    T: Scalar,
{
    pub fn new(start: Point2<T>, ctrl: Point2<T>, end: Point2<T>) -> Self {
        QuadraticBezier { start, ctrl, end }
    }

    pub fn eval(&self, t: T) -> Point2<T> {
        let t2 = t * t;
        let one_t = T::one() - t;
        let one_t2 = one_t * one_t;

        self.start * one_t2 + self.ctrl * (scalar::<T>(2.0) * one_t * t) + self.end * t2
    }

    /// Return the derivative function.
    /// The derivative is also a bezier curve but of degree n-1 - In the case of quadratic it is just a line.
    /// Since it returns the derivative function, eval() needs to be called separately
    pub fn derivative(&self) -> LineSegment<T> {
        let two = scalar::<T>(2.0);
        LineSegment {
            start: (self.ctrl - self.start) * two,
            end: (self.end - self.ctrl) * two,
        }
    }
}
