//! The chain of cubic segments produced by the fitter.

use alloc::vec::Vec;
use core::slice;

use super::cubic_bezier::CubicBezier;
use super::point2::Point2;
use super::sampler::SegmentSampler;
use super::{scalar, Scalar};

/// An ordered chain of cubic Bezier segments, each starting where the previous one ends.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct BezierPath<T> {
    segments: Vec<CubicBezier<T>>,
}

/// The segments produced by one call to the fitter
pub type FitResult<T> = BezierPath<T>;

impl<T> BezierPath<T>
where
    T: Scalar,
{
    pub fn new() -> Self {
        BezierPath {
            segments: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> slice::Iter<'_, CubicBezier<T>> {
        self.segments.iter()
    }

    pub fn push(&mut self, segment: CubicBezier<T>) {
        self.segments.push(segment);
    }

    /// First anchor of the path. Returns None for empty paths.
    pub fn start(&self) -> Option<Point2<T>> {
        self.segments.first().map(|s| s.start())
    }

    /// Last anchor of the path. Returns None for empty paths.
    pub fn end(&self) -> Option<Point2<T>> {
        self.segments.last().map(|s| s.end())
    }

    /// Evaluate a point along the path for t in [0,1]. Returns None for empty paths.
    /// Every segment covers an equal share of the parameter range.
    pub fn eval(&self, t: T) -> Option<Point2<T>> {
        let (index, local_t) = self.segment_parameter(t)?;
        Some(self.segments[index].eval(local_t))
    }

    /// All control points as `[x0, y0, x1, y1, x2, y2, x3, y3]` per segment, concatenated.
    pub fn to_flat(&self) -> Vec<T> {
        let mut flat = Vec::with_capacity(self.segments.len() * 8);
        for segment in &self.segments {
            flat.extend_from_slice(&segment.to_flat());
        }
        flat
    }

    /// Sample every segment with `sampler` and concatenate the flat vertex lists.
    /// The anchor shared by two neighboring segments appears twice.
    pub fn sample(&self, sampler: &SegmentSampler) -> Vec<T> {
        let mut flat = Vec::with_capacity(self.segments.len() * (sampler.points_in_arc() + 1) * 2);
        for segment in &self.segments {
            flat.extend(sampler.sample_flat(segment));
        }
        flat
    }

    fn segment_parameter(&self, t: T) -> Option<(usize, T)> {
        let count = self.segments.len();
        if count == 0 {
            return None;
        }

        let t = t.max(T::zero()).min(T::one());
        let count_t = scalar::<T>(count as f64);
        let scaled = t * count_t;
        if scaled >= count_t {
            return Some((count - 1, T::one()));
        }

        let index = scaled.floor().to_usize().unwrap_or(0).min(count - 1);
        let local = scaled - scalar::<T>(index as f64);
        Some((index, local))
    }
}

impl<T> Default for BezierPath<T>
where
    T: Scalar,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<CubicBezier<T>>> for BezierPath<T> {
    fn from(segments: Vec<CubicBezier<T>>) -> Self {
        BezierPath { segments }
    }
}

impl<T> From<BezierPath<T>> for Vec<CubicBezier<T>> {
    fn from(path: BezierPath<T>) -> Self {
        path.segments
    }
}

impl<T> FromIterator<CubicBezier<T>> for BezierPath<T> {
    fn from_iter<I: IntoIterator<Item = CubicBezier<T>>>(iter: I) -> Self {
        BezierPath {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for BezierPath<T> {
    type Item = CubicBezier<T>;
    type IntoIter = alloc::vec::IntoIter<CubicBezier<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BezierPath<T> {
    type Item = &'a CubicBezier<T>;
    type IntoIter = slice::Iter<'a, CubicBezier<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
