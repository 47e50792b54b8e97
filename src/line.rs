use super::point2::Point2;
use super::{scalar, Scalar, EPSILON};

/// LineSegment defined by a start and an endpoint, evaluatable
/// anywhere inbetween using interpolation parameter t: [0,1] in eval().
/// A LineSegment is equal to a linear Bezier curve; it is also what a
/// quadratic curve's derivative reduces to.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment<T> {
    pub(crate) start: Point2<T>,
    pub(crate) end: Point2<T>,
}

impl<T> LineSegment<T>
where
    T: Scalar,
{
    pub fn new(start: Point2<T>, end: Point2<T>) -> Self {
        LineSegment { start, end }
    }

    pub fn start(&self) -> Point2<T> {
        self.start
    }

    pub fn end(&self) -> Point2<T> {
        self.end
    }

    pub fn eval(&self, t: T) -> Point2<T> {
        self.start * (T::one() - t) + self.end * t
    }

    /// Return the derivative function.
    /// The derivative of a line is the constant vector from start to end.
    pub fn derivative(&self) -> Point2<T> {
        self.end - self.start
    }

    /// Return the distance from the LineSegment to Point p by calculating the projection
    pub fn distance_to_point(&self, p: Point2<T>) -> T {
        let l2 = self.derivative().squared_norm();
        // if start and endpoint are approx the same, return the distance to either
        if l2 < scalar(EPSILON) {
            return self.start.distance(p);
        }
        let t = ((p - self.start).dot(self.derivative()) / l2)
            .max(T::zero())
            .min(T::one());
        let projection = self.start + self.derivative() * t; // Projection falls on the segment
        projection.distance(p)
    }
}
