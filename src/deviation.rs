//! Measuring how far a polyline strays from a candidate curve.
//!
//! A point's chord-length parameter tells how far along the polyline it lies,
//! relative to the polyline's length. The Bezier parameter `t` is not
//! proportional to arc length though, so comparing the point with `curve.eval(u)`
//! would overstate the error wherever the curve speeds up or slows down.
//! Instead the curve is sampled at a few `t`, the cumulative arc length at each
//! sample is normalized to [0, 1], and the `t` at the same relative distance as
//! the point is found by linear interpolation between the bracketing samples.

use tinyvec::ArrayVec;

use super::config::ARC_LENGTH_SAMPLES;
use super::cubic_bezier::CubicBezier;
use super::point2::Point2;
use super::{scalar, Scalar};

/// Normalized cumulative arc length of a curve at `t = i / ARC_LENGTH_SAMPLES`.
#[derive(Debug, Clone)]
pub struct ArcLengthTable<T>
where
    T: Scalar,
{
    distances: ArrayVec<[T; ARC_LENGTH_SAMPLES + 1]>,
}

impl<T> ArcLengthTable<T>
where
    T: Scalar,
{
    pub fn new(curve: &CubicBezier<T>) -> Self {
        let parts = scalar::<T>(ARC_LENGTH_SAMPLES as f64);
        let mut distances: ArrayVec<[T; ARC_LENGTH_SAMPLES + 1]> = ArrayVec::new();
        distances.push(T::zero());

        let mut total = T::zero();
        let mut prev = curve.start();
        for i in 1..=ARC_LENGTH_SAMPLES {
            let p = curve.eval(scalar::<T>(i as f64) / parts);
            total = total + p.distance(prev);
            distances.push(total);
            prev = p;
        }
        for d in distances.iter_mut() {
            *d = *d / total;
        }
        ArcLengthTable { distances }
    }

    /// The sampled distances, starting at 0 and ending at 1
    pub fn distances(&self) -> &[T] {
        &self.distances
    }

    /// Find the curve parameter `t` at relative arc length `param`.
    /// Values outside [0, 1] are clamped to the curve's ends.
    pub fn find_t(&self, param: T) -> T {
        if param < T::zero() {
            return T::zero();
        }
        if param > T::one() {
            return T::one();
        }

        let parts = scalar::<T>(ARC_LENGTH_SAMPLES as f64);
        for i in 1..self.distances.len() {
            let len_max = self.distances[i];
            if param <= len_max {
                let len_min = self.distances[i - 1];
                let t_min = scalar::<T>((i - 1) as f64) / parts;
                let t_max = scalar::<T>(i as f64) / parts;
                // a span the curve does not advance through has no interior to interpolate
                if len_max == len_min {
                    return t_min;
                }
                return (param - len_min) / (len_max - len_min) * (t_max - t_min) + t_min;
            }
        }
        // rounding left the last distance just below 1
        T::one()
    }
}

/// Largest squared distance between a point and the curve, and which point it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxError<T> {
    pub squared: T,
    /// Index of the worst point, where the slice gets split if the fit is rejected
    pub index: usize,
}

/// Find the maximum squared distance of `points` to `curve`, looking each point up
/// at its relative arc length `params[i]` (see module docs).
///
/// If no point deviates at all the index defaults to the middle of the slice.
pub fn compute_max_error<T: Scalar>(
    points: &[Point2<T>],
    curve: &CubicBezier<T>,
    params: &[T],
) -> MaxError<T> {
    let table = ArcLengthTable::new(curve);
    let mut max = MaxError {
        squared: T::zero(),
        index: points.len() / 2,
    };

    for (i, (&p, &u)) in points.iter().zip(params.iter()).enumerate() {
        let t = table.find_t(u);
        let dist = curve.eval(t).squared_distance(p);
        if dist > max.squared {
            max = MaxError { squared: dist, index: i };
        }
    }
    max
}
