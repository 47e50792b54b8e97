use thiserror::Error;

/// Malformed input rejected at the library boundary, before any fitting starts.
///
/// Numerical degeneracies during the fit itself (collinear points, singular
/// least-squares systems, stalled refinement) are not errors; the fitter
/// recovers from them on its own.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    #[error("flat coordinate list has odd length {len}, expected x/y pairs")]
    OddCoordinateCount { len: usize },

    #[error("coordinate {index} is not a finite number")]
    NonFiniteCoordinate { index: usize },

    #[error("maximum squared error must be finite and greater than zero")]
    InvalidTolerance,

    #[error("points per arc must be at least 1")]
    ZeroPointsInArc,
}
