//! Least-squares placement of the inner control points of a cubic segment.
//!
//! With the anchors pinned to the first and last point and the control points
//! constrained to the tangent rays, the only unknowns are the distances
//! alpha_l and alpha_r along the left and right tangent. Minimizing the squared
//! distance between the points and the curve at their parameters gives a 2x2
//! linear system (the normal equations), solved here with Cramer's rule.

use super::cubic_bezier::CubicBezier;
use super::point2::Point2;
use super::{scalar, Scalar};

/// Alphas shorter than this fraction of the chord are rejected in favor of the heuristic.
const MIN_ALPHA_RATIO: f64 = 1.0e-6;

/// Place both control points a third of the chord length out along their tangents.
/// Used for two-point slices and whenever the least-squares solution is unusable.
pub fn heuristic_bezier<T: Scalar>(
    first: Point2<T>,
    last: Point2<T>,
    left_tangent: Point2<T>,
    right_tangent: Point2<T>,
) -> CubicBezier<T> {
    let dist = first.distance(last) / scalar(3.0);
    CubicBezier::new(
        first,
        first + left_tangent * dist,
        last + right_tangent * dist,
        last,
    )
}

/// Fit a cubic Bezier segment to `points` with the given parameterization and unit end tangents.
///
/// `left_tangent` points from the first point into the curve, `right_tangent` from
/// the last point back into the curve. The anchors are exactly the first and last point.
///
/// A singular system or an alpha that is negative or shorter than `1e-6` times
/// the chord falls back to `heuristic_bezier`: negative alphas would flip a
/// control point behind its anchor and zero ones make the Newton step divide by zero.
pub fn generate_bezier<T: Scalar>(
    points: &[Point2<T>],
    params: &[T],
    left_tangent: Point2<T>,
    right_tangent: Point2<T>,
) -> CubicBezier<T> {
    let first = points[0];
    let last = points[points.len() - 1];
    let three = scalar::<T>(3.0);
    // curve with both control points on the anchors, the alpha = 0 part of the model
    let anchors_only = CubicBezier::new(first, first, last, last);

    let mut c00 = T::zero();
    let mut c01 = T::zero();
    let mut c10 = T::zero();
    let mut c11 = T::zero();
    let mut x0 = T::zero();
    let mut x1 = T::zero();

    for (&p, &u) in points.iter().zip(params.iter()) {
        let ux = T::one() - u;
        let a0 = left_tangent * (three * u * (ux * ux));
        let a1 = right_tangent * (three * ux * (u * u));

        c00 = c00 + a0.dot(a0);
        c01 = c01 + a0.dot(a1);
        c10 = c10 + a0.dot(a1);
        c11 = c11 + a1.dot(a1);

        let tmp = p - anchors_only.eval(u);
        x0 = x0 + a0.dot(tmp);
        x1 = x1 + a1.dot(tmp);
    }

    let det_c0_c1 = c00 * c11 - c10 * c01;
    let det_c0_x = c00 * x1 - c10 * x0;
    let det_x_c1 = x0 * c11 - x1 * c01;

    let (alpha_l, alpha_r) = if det_c0_c1 == T::zero() {
        (T::zero(), T::zero())
    } else {
        (det_x_c1 / det_c0_c1, det_c0_x / det_c0_c1)
    };

    let seg_length = first.distance(last);
    let epsilon = scalar::<T>(MIN_ALPHA_RATIO) * seg_length;
    if alpha_l < epsilon || alpha_r < epsilon || !alpha_l.is_finite() || !alpha_r.is_finite() {
        log::trace!(
            "least squares rejected (alpha_l {:?}, alpha_r {:?}), using chord heuristic",
            alpha_l,
            alpha_r
        );
        return heuristic_bezier(first, last, left_tangent, right_tangent);
    }

    CubicBezier::new(
        first,
        first + left_tangent * alpha_l,
        last + right_tangent * alpha_r,
        last,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameterize::chord_length;
    use crate::EPSILON;
    use alloc::vec::Vec;

    #[test]
    fn heuristic_places_controls_at_thirds() {
        let first = Point2::new(0f64, 0f64);
        let last = Point2::new(10f64, 0f64);
        let curve = heuristic_bezier(first, last, Point2::new(1.0, 0.0), Point2::new(-1.0, 0.0));
        assert_eq!(curve.start(), first);
        assert_eq!(curve.end(), last);
        assert!((curve.ctrl1() - Point2::new(10.0 / 3.0, 0.0)).norm() < EPSILON);
        assert!((curve.ctrl2() - Point2::new(20.0 / 3.0, 0.0)).norm() < EPSILON);
    }

    #[test]
    fn recovers_exact_curve() {
        // sample a known curve whose control points lie on its end tangents
        let truth = CubicBezier::new(
            Point2::new(0f64, 0f64),
            Point2::new(0f64, 6f64),
            Point2::new(8f64, 6f64),
            Point2::new(8f64, 0f64),
        );
        let params: Vec<f64> = (0..=12).map(|i| i as f64 / 12.0).collect();
        let points: Vec<Point2<f64>> = params.iter().map(|&t| truth.eval(t)).collect();
        let left = Point2::new(0.0, 1.0);
        let right = Point2::new(0.0, 1.0);
        let fitted = generate_bezier(&points, &params, left, right);
        assert_eq!(fitted.start(), truth.start());
        assert_eq!(fitted.end(), truth.end());
        assert!((fitted.ctrl1() - truth.ctrl1()).norm() < 1e-6);
        assert!((fitted.ctrl2() - truth.ctrl2()).norm() < 1e-6);
    }

    #[test]
    fn singular_system_falls_back_to_heuristic() {
        // parameters 0 and 1 only: every basis weight of the inner control points vanishes
        let points = [Point2::new(0f64, 0f64), Point2::new(5f64, 5f64), Point2::new(9f64, 0f64)];
        let params = [0.0, 0.0, 1.0];
        let left = Point2::new(1.0, 1.0).normalize();
        let right = Point2::new(-1.0, 1.0).normalize();
        let fitted = generate_bezier(&points, &params, left, right);
        let expected = heuristic_bezier(points[0], points[2], left, right);
        assert_eq!(fitted, expected);
    }

    #[test]
    fn negative_alpha_falls_back_to_heuristic() {
        // points bulge downwards while the tangents point upwards
        let points = [
            Point2::new(0f64, 0f64),
            Point2::new(2f64, -3f64),
            Point2::new(5f64, -4f64),
            Point2::new(8f64, -3f64),
            Point2::new(10f64, 0f64),
        ];
        let params = chord_length(&points);
        let left = Point2::new(0.0, 1.0);
        let right = Point2::new(0.0, 1.0);
        let fitted = generate_bezier(&points, &params, left, right);
        let expected = heuristic_bezier(points[0], points[4], left, right);
        assert_eq!(fitted, expected);
    }
}
