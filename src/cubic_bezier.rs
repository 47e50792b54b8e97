use super::line::LineSegment;
use super::point2::Point2;
use super::quadratic_bezier::QuadraticBezier;
use super::{scalar, Scalar};

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
///
/// This is the unit of output of the fitter: one segment of a fitted `BezierPath`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier<T> {
    pub(crate) start: Point2<T>,
    pub(crate) ctrl1: Point2<T>,
    pub(crate) ctrl2: Point2<T>,
    pub(crate) end: Point2<T>,
}

impl<T> CubicBezier<T>
where
    T: Scalar,
{
    pub fn new(start: Point2<T>, ctrl1: Point2<T>, ctrl2: Point2<T>, end: Point2<T>) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// The anchor the curve starts at
    pub fn start(&self) -> Point2<T> {
        self.start
    }

    pub fn ctrl1(&self) -> Point2<T> {
        self.ctrl1
    }

    pub fn ctrl2(&self) -> Point2<T> {
        self.ctrl2
    }

    /// The anchor the curve ends at
    pub fn end(&self) -> Point2<T> {
        self.end
    }

    /// Returns [start, ctrl1, ctrl2, end]
    pub fn control_points(&self) -> [Point2<T>; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Flatten into [start.x, start.y, ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, end.x, end.y]
    pub fn to_flat(&self) -> [T; 8] {
        [
            self.start.x,
            self.start.y,
            self.ctrl1.x,
            self.ctrl1.y,
            self.ctrl2.x,
            self.ctrl2.y,
            self.end.x,
            self.end.y,
        ]
    }

    /// Evaluate the curve at t by direct evaluation of the cubic Bernstein basis
    pub fn eval(&self, t: T) -> Point2<T> {
        let three = scalar::<T>(3.0);
        let one_t = T::one() - t;

        let a = self.start * (one_t * one_t * one_t);
        let b = self.ctrl1 * (three * one_t * one_t * t);
        let c = self.ctrl2 * (three * one_t * t * t);
        let d = self.end * (t * t * t);
        (a + b) + (c + d)
    }

    /// Return the derivative function.
    /// The derivative is also a bezier curve but of degree n-1 (cubic->quadratic)
    /// Since it returns the derivative function, eval() needs to be called separately
    pub fn derivative(&self) -> QuadraticBezier<T> {
        let three = scalar::<T>(3.0);
        QuadraticBezier {
            start: (self.ctrl1 - self.start) * three,
            ctrl: (self.ctrl2 - self.ctrl1) * three,
            end: (self.end - self.ctrl2) * three,
        }
    }

    /// Line between the two anchors
    pub fn baseline(&self) -> LineSegment<T> {
        LineSegment {
            start: self.start,
            end: self.end,
        }
    }
}
