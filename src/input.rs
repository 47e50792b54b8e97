//! Conversions from raw coordinate lists, and the render-ready `curve_through` pipeline.

use alloc::vec;
use alloc::vec::Vec;

use super::config::{CurveThroughConfig, FitConfig};
use super::error::InputError;
use super::fit::CurveFitter;
use super::point2::Point2;
use super::sampler::SegmentSampler;
use super::Scalar;

/// Pair up a flat `[x0, y0, x1, y1, ...]` list into points.
pub fn points_from_flat<T: Scalar>(coords: &[T]) -> Result<Vec<Point2<T>>, InputError> {
    if coords.len() % 2 != 0 {
        return Err(InputError::OddCoordinateCount { len: coords.len() });
    }
    if let Some(index) = coords.iter().position(|c| !c.is_finite()) {
        return Err(InputError::NonFiniteCoordinate { index });
    }
    Ok(coords
        .chunks_exact(2)
        .map(|c| Point2::new(c[0], c[1]))
        .collect())
}

/// Convert `[x, y]` pairs into points.
/// The index in a `NonFiniteCoordinate` error counts coordinates, not pairs.
pub fn points_from_pairs<T: Scalar>(pairs: &[[T; 2]]) -> Result<Vec<Point2<T>>, InputError> {
    let mut points = Vec::with_capacity(pairs.len());
    for (i, &pair) in pairs.iter().enumerate() {
        for (j, c) in pair.iter().enumerate() {
            if !c.is_finite() {
                return Err(InputError::NonFiniteCoordinate { index: 2 * i + j });
            }
        }
        points.push(Point2::from(pair));
    }
    Ok(points)
}

/// Fit `points` loosely and sample the result into a polyline ready for drawing.
///
/// Exactly two points come back unchanged as a straight line. Any other input
/// with fewer than four points gives an empty polyline. Otherwise every fitted
/// segment contributes `points_in_arc + 1` vertices, so the anchor shared by
/// two segments appears twice.
pub fn curve_through<T: Scalar>(
    points: &[Point2<T>],
    config: &CurveThroughConfig<T>,
) -> Result<Vec<Point2<T>>, InputError> {
    let fitter = CurveFitter::new(FitConfig::new(config.curve_error))?;
    let sampler = SegmentSampler::new(config.points_in_arc)?;
    if let Some(index) = points
        .iter()
        .flat_map(|p| [p.x, p.y])
        .position(|c| !c.is_finite())
    {
        return Err(InputError::NonFiniteCoordinate { index });
    }

    if points.len() == 2 {
        return Ok(vec![points[0], points[1]]);
    }
    if points.len() < 4 {
        return Ok(Vec::new());
    }

    let path = fitter.fit(points);
    let mut out = Vec::with_capacity(path.len() * (config.points_in_arc + 1));
    for segment in path.segments() {
        out.extend(sampler.sample(segment));
    }
    Ok(out)
}

/// `curve_through` on flat `[x0, y0, x1, y1, ...]` coordinate lists.
pub fn curve_through_flat<T: Scalar>(
    coords: &[T],
    config: &CurveThroughConfig<T>,
) -> Result<Vec<T>, InputError> {
    let points = points_from_flat(coords)?;
    let curve = curve_through(&points, config)?;
    let mut flat = Vec::with_capacity(curve.len() * 2);
    for p in curve {
        flat.push(p.x);
        flat.push(p.y);
    }
    Ok(flat)
}
