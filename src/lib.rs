//! Fit connected cubic Bézier curves to freeform 2D polylines.
//!
//! The fitter takes an ordered sequence of points (e.g. captured from a pen or
//! mouse gesture) and a maximum squared error, and returns the shortest chain of
//! cubic Bézier segments it can find that stays within that tolerance.
//! Tangent estimation, chord-length parameterization, a least-squares solve for
//! the control points, Newton-Raphson reparameterization and recursive
//! subdivision at the worst-fitting point are combined as in Schneider's
//! algorithm ("An Algorithm for Automatically Fitting Digitized Curves",
//! Graphics Gems, 1990).
//!
//! # Example
//! ```rust
//! use curvefit::{fit_curve, Point2, SegmentSampler};
//!
//! let gesture = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 2.0),
//!     Point2::new(20.0, -2.0),
//!     Point2::new(30.0, 2.0),
//!     Point2::new(40.0, 0.0),
//! ];
//! let path = fit_curve(&gesture, 2.0);
//! assert_eq!(path.start(), Some(gesture[0]));
//! assert_eq!(path.end(), Some(gesture[4]));
//!
//! // turn the curves back into vertices for drawing
//! let vertices: Vec<f64> = path.sample(&SegmentSampler::default());
//! # let _ = vertices;
//! ```
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

use core::fmt::Debug;

use num_traits::{Float, NumCast};

pub mod config;
pub mod cubic_bezier;
pub mod deviation;
pub mod error;
pub mod fit;
pub mod input;
pub mod least_squares;
pub mod line;
pub mod parameterize;
pub mod path;
pub mod point2;
pub mod quadratic_bezier;
pub mod roots;
pub mod sampler;

pub use config::{CurveThroughConfig, FitConfig};
pub use cubic_bezier::CubicBezier;
pub use error::InputError;
pub use fit::{fit_curve, fit_curve_with, CurveFitter};
pub use input::{curve_through, curve_through_flat, points_from_flat, points_from_pairs};
pub use line::LineSegment;
pub use path::{BezierPath, FitResult};
pub use point2::Point2;
pub use quadratic_bezier::QuadraticBezier;
pub use sampler::SegmentSampler;

/// Float type used for the crate's constants and for tests
pub type NativeFloat = f64;

/// Tolerance used by the tests and by approximate comparisons throughout the crate
pub const EPSILON: NativeFloat = 1e-9;

/// Scalar type the fitter operates on.
/// Blanket-implemented for every float that is also `Default + Debug`, i.e. `f32` and `f64`.
pub trait Scalar: Float + Default + Debug {}

impl<T> Scalar for T where T: Float + Default + Debug {}

/// Convert a native float constant into the scalar type `T`.
/// The cast cannot fail for the float types `Scalar` is implemented for.
#[inline]
pub(crate) fn scalar<T: Scalar>(value: NativeFloat) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::nan)
}
