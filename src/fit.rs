//! Recursive fitting of cubic Bezier segments to a polyline.
//!
//! Each slice of the polyline is first fitted directly with a chord-length
//! parameterization. If that misses the tolerance but is within its square,
//! the parameters are refined with Newton-Raphson steps for a bounded number of
//! rounds. Otherwise (or if refinement does not converge) the slice is split at
//! its worst-fitting point and both halves are fitted on their own, sharing the
//! split point and the tangent through it.

use alloc::vec;
use alloc::vec::Vec;

use super::config::FitConfig;
use super::cubic_bezier::CubicBezier;
use super::deviation::{compute_max_error, MaxError};
use super::error::InputError;
use super::least_squares::{generate_bezier, heuristic_bezier};
use super::parameterize::{chord_length, reparameterize};
use super::path::BezierPath;
use super::point2::Point2;
use super::Scalar;

/// Fit a chain of cubic Bezier segments to `points` with at most `max_squared_error`
/// squared distance between any point and the curve.
///
/// Consecutive duplicate points are dropped first. Fewer than two distinct points
/// produce an empty path. The tolerance is not validated here: a tolerance no
/// single curve can satisfy degrades to one segment per input span.
/// Use `CurveFitter::new` to reject bad tolerances up front.
pub fn fit_curve<T: Scalar>(points: &[Point2<T>], max_squared_error: T) -> BezierPath<T> {
    fit_curve_with(points, &FitConfig::new(max_squared_error))
}

/// Same as `fit_curve` with full control over the refinement parameters.
pub fn fit_curve_with<T: Scalar>(points: &[Point2<T>], config: &FitConfig<T>) -> BezierPath<T> {
    CurveFitter { config: *config }.fit(points)
}

/// Fits polylines with one validated configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFitter<T> {
    config: FitConfig<T>,
}

impl<T> CurveFitter<T>
where
    T: Scalar,
{
    pub fn new(config: FitConfig<T>) -> Result<Self, InputError> {
        config.validate()?;
        Ok(CurveFitter { config })
    }

    pub fn config(&self) -> &FitConfig<T> {
        &self.config
    }

    pub fn fit(&self, points: &[Point2<T>]) -> BezierPath<T> {
        let input_len = points.len();
        let points = dedup_consecutive(points);
        log::debug!(
            "fitting {} points ({} after dedup), max squared error {:?}",
            input_len,
            points.len(),
            self.config.max_squared_error
        );
        if points.len() < 2 {
            return BezierPath::new();
        }

        let left = left_tangent(&points);
        let right = right_tangent(&points);
        let path: BezierPath<T> = self.fit_slice(&points, left, right).into();
        log::debug!("fitted {} segments", path.len());
        path
    }

    /// Fit one slice with the given unit end tangents, subdividing as needed.
    /// `points` holds at least two points, no two consecutive ones equal.
    fn fit_slice(
        &self,
        points: &[Point2<T>],
        left: Point2<T>,
        right: Point2<T>,
    ) -> Vec<CubicBezier<T>> {
        let tolerance = self.config.max_squared_error;
        let first = points[0];
        let last = points[points.len() - 1];

        if points.len() == 2 {
            return vec![heuristic_bezier(first, last, left, right)];
        }

        let params = chord_length(points);
        let mut curve = generate_bezier(points, &params, left, right);
        let mut max = compute_max_error(points, &curve, &params);
        if max.squared < tolerance {
            return vec![curve];
        }

        if max.squared < tolerance * tolerance {
            let mut refined = params.clone();
            let mut prev = max;
            for iteration in 0..self.config.max_iterations {
                refined = reparameterize(&curve, points, &refined);
                curve = generate_bezier(points, &refined, left, right);
                // always measured against the chord-length parameters
                max = compute_max_error(points, &curve, &params);
                if max.squared < tolerance {
                    log::trace!(
                        "{} points converged after {} refinement rounds",
                        points.len(),
                        iteration + 1
                    );
                    return vec![curve];
                }
                if self.is_stalled(&prev, &max) {
                    log::trace!(
                        "refinement stalled at split {} after {} rounds",
                        max.index,
                        iteration + 1
                    );
                    break;
                }
                prev = max;
            }
        }

        let split = max.index.clamp(1, points.len() - 2);
        log::trace!(
            "splitting {} points at {} (max squared error {:?})",
            points.len(),
            split,
            max.squared
        );
        let to_center = center_tangent(points, split);
        let mut segments = self.fit_slice(&points[..=split], left, to_center);
        segments.extend(self.fit_slice(&points[split..], -to_center, right));
        segments
    }

    /// Same split point as last round and an error ratio within `1 ± stall_ratio`
    fn is_stalled(&self, prev: &MaxError<T>, current: &MaxError<T>) -> bool {
        if prev.index != current.index {
            return false;
        }
        let change = current.squared / prev.squared;
        let r = self.config.stall_ratio;
        change > T::one() - r && change < T::one() + r
    }
}

/// Drop every point that is exactly equal to its predecessor.
pub fn dedup_consecutive<T: Scalar>(points: &[Point2<T>]) -> Vec<Point2<T>> {
    let mut out: Vec<Point2<T>> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    out
}

/// Unit tangent at the start, pointing from the first point towards the second.
pub fn left_tangent<T: Scalar>(points: &[Point2<T>]) -> Point2<T> {
    (points[1] - points[0]).normalize()
}

/// Unit tangent at the end, pointing from the last point back towards the one before it.
pub fn right_tangent<T: Scalar>(points: &[Point2<T>]) -> Point2<T> {
    let n = points.len();
    (points[n - 2] - points[n - 1]).normalize()
}

/// Unit tangent through the interior point `split`, pointing backwards along the polyline.
///
/// It is the right tangent of the half ending at `split`; its negation is the
/// left tangent of the half starting there. When the neighbors coincide (the
/// polyline doubles back on itself) the vector from the previous point to the
/// split point, rotated by 90 degrees, is used instead.
pub fn center_tangent<T: Scalar>(points: &[Point2<T>], split: usize) -> Point2<T> {
    let mut center = points[split - 1] - points[split + 1];
    if center.x == T::zero() && center.y == T::zero() {
        center = (points[split - 1] - points[split]).perp();
    }
    center.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use core::f64::consts::PI;

    fn s_curve() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 2.0),
            Point2::new(20.0, -2.0),
            Point2::new(30.0, 2.0),
            Point2::new(40.0, 0.0),
        ]
    }

    fn arc() -> Vec<Point2<f64>> {
        (0..=20)
            .map(|i| {
                let a = PI * i as f64 / 20.0;
                Point2::new(100.0 * a.cos(), 100.0 * a.sin())
            })
            .collect()
    }

    fn sine() -> Vec<Point2<f64>> {
        (0..=40)
            .map(|i| Point2::new(5.0 * i as f64, 30.0 * (0.3 * i as f64).sin()))
            .collect()
    }

    fn assert_close(actual: Point2<f64>, expected: [f64; 2]) {
        let expected = Point2::from(expected);
        assert!(
            actual.distance(expected) < 1e-6,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    fn assert_continuous(path: &BezierPath<f64>) {
        let segments: Vec<&CubicBezier<f64>> = path.segments().collect();
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
    }

    #[test]
    fn s_curve_golden() {
        let path = fit_curve(&s_curve(), 2.0);
        assert_eq!(path.len(), 2);
        let segments: Vec<&CubicBezier<f64>> = path.segments().collect();

        assert_close(segments[0].start(), [0.0, 0.0]);
        assert_close(segments[0].ctrl1(), [38.434686916737235, 7.6869373833474475]);
        assert_close(segments[0].ctrl2(), [-19.468641529479754, -2.0]);
        assert_close(segments[0].end(), [20.0, -2.0]);

        assert_close(segments[1].start(), [20.0, -2.0]);
        assert_close(segments[1].ctrl1(), [59.468641529479754, -2.0]);
        assert_close(segments[1].ctrl2(), [1.5653130832627724, 7.686937383347445]);
        assert_close(segments[1].end(), [40.0, 0.0]);
        assert_continuous(&path);
    }

    #[test]
    fn s_curve_loose_tolerances() {
        let path = fit_curve(&s_curve(), 10.0);
        assert_eq!(path.len(), 1);
        let curve = path.segments().next().unwrap();
        assert_close(curve.ctrl1(), [6.454159261337968, 1.2908318522675937]);
        assert_close(curve.ctrl2(), [33.545840738662044, 1.2908318522675915]);

        for tolerance in [50.0, 100.0, 1e6] {
            let path = fit_curve(&s_curve(), tolerance);
            assert_eq!(path.len(), 1);
            let curve = path.segments().next().unwrap();
            assert_close(curve.ctrl1(), [11.751275375862356, 2.350255075172471]);
            assert_close(curve.ctrl2(), [28.248724624137648, 2.3502550751724707]);
        }
    }

    #[test]
    fn refinement_decides_the_fit() {
        // only converges to a single segment through Newton-Raphson refinement
        let hook = [
            [0.0, 15.0],
            [20.024, 12.822],
            [37.348, 7.175],
            [50.0, 0.411],
            [57.264, -4.456],
            [59.878, -4.792],
            [59.832, 0.756],
            [59.831, 11.793],
            [62.568, 26.314],
        ]
        .map(Point2::from);
        let path = fit_curve(&hook, 20.0);
        assert_eq!(path.len(), 1);
        let curve = path.segments().next().unwrap();
        assert_close(curve.ctrl1(), [63.78021403763739, 8.062659499901404]);
        assert_close(curve.ctrl2(), [52.12966525402676, -29.06599957847191]);

        let hook = [
            [0.0, 15.0],
            [22.884, 12.822],
            [39.709, 7.175],
            [47.264, 0.411],
            [46.7, -4.456],
            [42.984, -4.792],
            [42.568, 0.756],
            [50.351, 11.793],
        ]
        .map(Point2::from);
        let path = fit_curve(&hook, 100.0);
        assert_eq!(path.len(), 2);
        let segments: Vec<&CubicBezier<f64>> = path.segments().collect();
        assert_close(segments[0].ctrl1(), [0.7071422805938076, 14.932697260656646]);
        assert_close(segments[0].ctrl2(), [58.88112273329604, 10.352033079752161]);
        assert_close(segments[0].end(), [46.7, -4.456]);
        assert_close(segments[1].ctrl1(), [43.17332001726573, -8.743223352842623]);
        assert_close(segments[1].ctrl2(), [47.15176252699931, 7.256191058780857]);
        assert_close(segments[1].end(), [50.351, 11.793]);
    }

    #[test]
    fn segment_count_ladders() {
        let cases: [(Vec<Point2<f64>>, &[(f64, usize)]); 3] = [
            (
                s_curve(),
                &[
                    (0.01, 4),
                    (0.5, 2),
                    (1.0, 2),
                    (2.0, 2),
                    (4.0, 2),
                    (10.0, 1),
                    (50.0, 1),
                    (100.0, 1),
                    (1e6, 1),
                ],
            ),
            (
                arc(),
                &[
                    (0.01, 8),
                    (0.1, 6),
                    (1.0, 4),
                    (10.0, 1),
                    (100.0, 1),
                    (1000.0, 1),
                ],
            ),
            (
                sine(),
                &[
                    (0.01, 16),
                    (0.1, 13),
                    (1.0, 10),
                    (4.0, 4),
                    (10.0, 4),
                    (50.0, 3),
                    (100.0, 3),
                    (1000.0, 3),
                ],
            ),
        ];
        for (points, ladder) in cases.iter() {
            for &(tolerance, expected) in ladder.iter() {
                let path = fit_curve(points, tolerance);
                assert_eq!(path.len(), expected, "tolerance {}", tolerance);
                assert_continuous(&path);
            }
        }
    }

    #[test]
    fn segment_count_does_not_grow_with_tolerance() {
        for points in [s_curve(), arc(), sine()] {
            let mut prev = usize::MAX;
            for tolerance in [0.01, 0.1, 0.5, 1.0, 2.0, 4.0, 10.0, 50.0, 100.0, 1000.0] {
                let count = fit_curve(&points, tolerance).len();
                assert!(count <= prev);
                prev = count;
            }
        }
    }

    #[test]
    fn two_points_give_straight_segment() {
        let path = fit_curve(&[Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)], 1.0);
        assert_eq!(path.len(), 1);
        let curve = path.segments().next().unwrap();
        assert_eq!(curve.start(), Point2::new(0.0, 0.0));
        assert_eq!(curve.end(), Point2::new(10.0, 0.0));
        assert_close(curve.ctrl1(), [3.3333333333333335, 0.0]);
        assert_close(curve.ctrl2(), [6.666666666666666, 0.0]);

        let baseline = curve.baseline();
        assert!(baseline.distance_to_point(curve.ctrl1()) < EPSILON);
        assert!(baseline.distance_to_point(curve.ctrl2()) < EPSILON);
    }

    #[test]
    fn three_points_fit_one_segment() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 5.0),
            Point2::new(10.0, 0.0),
        ];
        let path = fit_curve(&points, 1.0);
        assert_eq!(path.len(), 1);
        let curve = path.segments().next().unwrap();
        assert_close(curve.ctrl1(), [6.666666666666666, 6.666666666666666]);
        assert_close(curve.ctrl2(), [3.333333333333334, 6.666666666666666]);
    }

    #[test]
    fn collinear_points_fit_one_segment() {
        let points: Vec<Point2<f64>> = (0..5).map(|i| Point2::new(i as f64, 0.0)).collect();
        let path = fit_curve(&points, 1.0);
        assert_eq!(path.len(), 1);
        let curve = path.segments().next().unwrap();
        assert_close(curve.ctrl1(), [4.0 / 3.0, 0.0]);
        assert_close(curve.ctrl2(), [8.0 / 3.0, 0.0]);
    }

    #[test]
    fn duplicates_are_ignored() {
        let with_duplicates = [
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 5.0),
        ];
        let path = fit_curve(&with_duplicates, 1.0);
        assert_eq!(path, fit_curve(&[Point2::new(0.0, 0.0), Point2::new(5.0, 5.0)], 1.0));
        let curve = path.segments().next().unwrap();
        assert_close(curve.ctrl1(), [5.0 / 3.0, 5.0 / 3.0]);
        assert_close(curve.ctrl2(), [10.0 / 3.0, 10.0 / 3.0]);

        let mut doubled = Vec::new();
        for p in sine() {
            doubled.push(p);
            doubled.push(p);
        }
        assert_eq!(fit_curve(&doubled, 1.0), fit_curve(&sine(), 1.0));
    }

    #[test]
    fn degenerate_input_gives_empty_path() {
        assert!(fit_curve::<f64>(&[], 1.0).is_empty());
        assert!(fit_curve(&[Point2::new(3.0, 4.0)], 1.0).is_empty());
        let same = [Point2::new(1.0, 1.0); 4];
        assert!(fit_curve(&same, 1.0).is_empty());
    }

    #[test]
    fn doubling_back_uses_rotated_tangent() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(20.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        let path = fit_curve(&points, 1.0);
        assert_eq!(path.len(), 4);
        assert_continuous(&path);
        let segments: Vec<&CubicBezier<f64>> = path.segments().collect();
        assert_close(segments[0].ctrl1(), [10.0 / 3.0, 0.0]);
        assert_close(segments[0].ctrl2(), [20.0 / 3.0, 0.0]);
        assert_close(segments[1].start(), [10.0, 0.0]);
        assert_close(segments[1].ctrl1(), [40.0 / 3.0, 0.0]);
        assert_close(segments[1].ctrl2(), [20.0, -10.0 / 3.0]);
        assert_close(segments[1].end(), [20.0, 0.0]);
        assert_close(segments[2].ctrl1(), [20.0, 10.0 / 3.0]);
        assert_close(segments[2].ctrl2(), [40.0 / 3.0, 0.0]);
        assert_close(segments[3].end(), [0.0, 0.0]);
        for segment in segments {
            assert!(segment.control_points().iter().all(|p| p.is_finite()));
        }
    }

    #[test]
    fn center_tangent_rotates_when_neighbors_coincide() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        // previous point minus split point is (-10, 0), rotated to (0, -10)
        assert_eq!(center_tangent(&points, 1), Point2::new(0.0, -1.0));

        let straight = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        assert_eq!(center_tangent(&straight, 1), Point2::new(-1.0, 0.0));
    }

    #[test]
    fn end_tangents() {
        let points = s_curve();
        assert!((left_tangent(&points).norm() - 1.0).abs() < EPSILON);
        assert!((right_tangent(&points).norm() - 1.0).abs() < EPSILON);
        assert_close(right_tangent(&points), [-10.0 / 104f64.sqrt(), 2.0 / 104f64.sqrt()]);
    }

    #[test]
    fn endpoints_are_exact() {
        for points in [s_curve(), arc(), sine()] {
            for tolerance in [0.01, 1.0, 100.0] {
                let path = fit_curve(&points, tolerance);
                assert_eq!(path.start(), Some(points[0]));
                assert_eq!(path.end(), Some(points[points.len() - 1]));
            }
        }
    }

    #[test]
    fn every_segment_respects_the_tolerance() {
        let points = sine();
        for tolerance in [0.1, 1.0, 10.0] {
            let path = fit_curve(&points, tolerance);
            let mut from = 0;
            for segment in path.segments() {
                // every anchor is one of the input points
                let to = from + 1 + points[from + 1..]
                    .iter()
                    .position(|p| *p == segment.end())
                    .unwrap();
                assert_eq!(points[from], segment.start());
                let slice = &points[from..=to];
                if slice.len() > 2 {
                    let max = compute_max_error(slice, segment, &chord_length(slice));
                    assert!(max.squared < tolerance, "{:?} >= {}", max.squared, tolerance);
                }
                from = to;
            }
            assert_eq!(from, points.len() - 1);
        }
    }

    #[test]
    fn without_refinement_still_terminates() {
        let config = FitConfig::new(1.0).with_max_iterations(0);
        let points = sine();
        let path = fit_curve_with(&points, &config);
        assert!(!path.is_empty());
        assert_eq!(path.start(), Some(points[0]));
        assert_eq!(path.end(), Some(points[points.len() - 1]));
        assert_continuous(&path);
    }

    #[test]
    fn unreachable_tolerance_gives_one_segment_per_span() {
        let path = fit_curve(&s_curve(), 0.0);
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn fitter_validates_config() {
        assert_eq!(
            CurveFitter::new(FitConfig::new(-1.0f64)),
            Err(InputError::InvalidTolerance)
        );
        let fitter = CurveFitter::new(FitConfig::new(2.0f64)).unwrap();
        assert_eq!(fitter.config().max_squared_error, 2.0);
        assert_eq!(fitter.fit(&s_curve()), fit_curve(&s_curve(), 2.0));
    }

    #[test]
    fn single_precision() {
        let points: Vec<Point2<f32>> = s_curve()
            .iter()
            .map(|p| Point2::new(p.x as f32, p.y as f32))
            .collect();
        let path = fit_curve(&points, 2.0f32);
        assert_eq!(path.len(), 2);
        assert_eq!(path.start(), Some(points[0]));
        assert_eq!(path.end(), Some(points[4]));
    }
}
