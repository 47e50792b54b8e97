//! Fixed-step sampling of fitted segments for rendering.

use alloc::vec::Vec;

use super::config::DEFAULT_POINTS_IN_ARC;
use super::cubic_bezier::CubicBezier;
use super::error::InputError;
use super::point2::Point2;
use super::{scalar, Scalar};

/// Turns a cubic segment into a polyline at evenly spaced curve parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentSampler {
    points_in_arc: usize,
}

impl SegmentSampler {
    /// `points_in_arc` is the number of spans per segment and must be at least 1.
    pub fn new(points_in_arc: usize) -> Result<Self, InputError> {
        if points_in_arc == 0 {
            return Err(InputError::ZeroPointsInArc);
        }
        Ok(SegmentSampler { points_in_arc })
    }

    pub fn points_in_arc(&self) -> usize {
        self.points_in_arc
    }

    /// `points_in_arc + 1` points at `t = i / points_in_arc`, both anchors included.
    pub fn sample<T: Scalar>(&self, curve: &CubicBezier<T>) -> Vec<Point2<T>> {
        let n = scalar::<T>(self.points_in_arc as f64);
        (0..=self.points_in_arc)
            .map(|i| curve.eval(scalar::<T>(i as f64) / n))
            .collect()
    }

    /// Same as `sample` as a flat `[x0, y0, x1, y1, ...]` list
    pub fn sample_flat<T: Scalar>(&self, curve: &CubicBezier<T>) -> Vec<T> {
        let mut flat = Vec::with_capacity((self.points_in_arc + 1) * 2);
        for p in self.sample(curve) {
            flat.push(p.x);
            flat.push(p.y);
        }
        flat
    }
}

impl Default for SegmentSampler {
    fn default() -> Self {
        SegmentSampler {
            points_in_arc: DEFAULT_POINTS_IN_ARC,
        }
    }
}
