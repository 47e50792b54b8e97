//! Fitting and sampling parameters.

use super::error::InputError;
use super::{scalar, Scalar};

/// Maximum number of Newton-Raphson reparameterization rounds per slice before subdividing.
pub const MAX_ITERATIONS: usize = 20;

/// Relative error change below which refinement is considered stalled.
/// A round whose split point did not move and whose error ratio to the previous
/// round lies within `1 ± STALL_RATIO_TOLERANCE` aborts the refinement early.
/// Only affects how quickly the fitter gives up on a slice, never the error bound.
pub const STALL_RATIO_TOLERANCE: f64 = 1e-4;

/// Number of spans a candidate curve is sampled with when mapping
/// relative arc length back to a curve parameter.
pub const ARC_LENGTH_SAMPLES: usize = 10;

/// Default number of spans each fitted segment is sampled with for rendering
pub const DEFAULT_POINTS_IN_ARC: usize = 5;

/// Default squared error used by `curve_through`
pub const DEFAULT_CURVE_ERROR: f64 = 50.0;

/// Parameters of one fit.
/// The same configuration applies to the whole polyline and every slice the fitter subdivides it into.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct FitConfig<T> {
    /// Tolerance: maximum squared distance between an input point and the fitted curve
    pub max_squared_error: T,
    /// Cap on reparameterization rounds per slice. 0 disables refinement entirely.
    pub max_iterations: usize,
    /// See `STALL_RATIO_TOLERANCE`
    pub stall_ratio: T,
}

impl<T> FitConfig<T>
where
    T: Scalar,
{
    pub fn new(max_squared_error: T) -> Self {
        FitConfig {
            max_squared_error,
            max_iterations: MAX_ITERATIONS,
            stall_ratio: scalar(STALL_RATIO_TOLERANCE),
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_stall_ratio(mut self, stall_ratio: T) -> Self {
        self.stall_ratio = stall_ratio;
        self
    }

    /// The tolerance must be a finite number greater than zero.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.max_squared_error.is_finite() || self.max_squared_error <= T::zero() {
            return Err(InputError::InvalidTolerance);
        }
        if !self.stall_ratio.is_finite() || self.stall_ratio < T::zero() {
            return Err(InputError::InvalidTolerance);
        }
        Ok(())
    }
}

/// Options of `curve_through`: how loosely to fit and how densely to sample the result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveThroughConfig<T> {
    /// Number of spans each fitted segment is sampled with
    pub points_in_arc: usize,
    /// Maximum squared error handed to the fitter
    pub curve_error: T,
}

impl<T> CurveThroughConfig<T>
where
    T: Scalar,
{
    pub fn new(points_in_arc: usize, curve_error: T) -> Self {
        CurveThroughConfig {
            points_in_arc,
            curve_error,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.points_in_arc == 0 {
            return Err(InputError::ZeroPointsInArc);
        }
        FitConfig::new(self.curve_error).validate()
    }
}

impl<T> Default for CurveThroughConfig<T>
where
    T: Scalar,
{
    fn default() -> Self {
        CurveThroughConfig {
            points_in_arc: DEFAULT_POINTS_IN_ARC,
            curve_error: scalar(DEFAULT_CURVE_ERROR),
        }
    }
}
