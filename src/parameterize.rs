//! Assigning curve parameters to polyline points.

use alloc::vec::Vec;

use super::cubic_bezier::CubicBezier;
use super::point2::Point2;
use super::roots::newton_raphson_step;
use super::Scalar;

/// Assign parameter values in [0, 1] to the points proportional to the
/// cumulative straight-line distance along the polyline.
///
/// The result is non-decreasing, starts at 0 and ends at exactly 1.
/// The points must not all coincide, otherwise the normalization divides by zero.
pub fn chord_length<T: Scalar>(points: &[Point2<T>]) -> Vec<T> {
    let mut params = Vec::with_capacity(points.len());
    let mut total = T::zero();
    let mut prev: Option<Point2<T>> = None;
    for &p in points {
        if let Some(prev) = prev {
            total = total + p.distance(prev);
        }
        params.push(total);
        prev = Some(p);
    }
    for u in params.iter_mut() {
        *u = *u / total;
    }
    params
}

/// One Newton-Raphson step towards the parameter on `curve` closest to `point`.
///
/// At the closest point the difference q(t) - p is perpendicular to the tangent q'(t), so we look for a root of
/// f(t) = (q(t) - p) · q'(t). The step divides by
/// q'x² + q'y² + 2 (q(t) - p) · q''(t), i.e. the curvature term is added once per coordinate.
/// This damps the step compared to the exact derivative, and the fitted curves depend on it.
pub fn newton_raphson_root_find<T: Scalar>(curve: &CubicBezier<T>, point: Point2<T>, t: T) -> T {
    let first = curve.derivative();
    let second = first.derivative();
    newton_raphson_step(
        t,
        |t| (curve.eval(t) - point).dot(first.eval(t)),
        |t| {
            let d = first.eval(t);
            let curvature = (curve.eval(t) - point).dot(second.eval(t));
            (d.x * d.x + curvature) + (d.y * d.y + curvature)
        },
    )
}

/// Try to find a better parameterization of `points` for the current `curve`.
/// The refined values are neither clamped to [0, 1] nor re-sorted.
pub fn reparameterize<T: Scalar>(curve: &CubicBezier<T>, points: &[Point2<T>], params: &[T]) -> Vec<T> {
    params
        .iter()
        .zip(points.iter())
        .map(|(&u, &p)| newton_raphson_root_find(curve, p, u))
        .collect()
}
