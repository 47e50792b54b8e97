//! Newton-Raphson root finding.
//!
//! Available functions:
//! - `newton_raphson_step()`
use num_traits::Float;

/// Perform a single Newton-Raphson step x' = x - f(x) / f'(x) towards a root of f,
/// given closures for f and its derivative.
///
/// A derivative of exactly zero leaves `x` unchanged instead of producing an infinite step.
/// No clamping is done: the caller decides what to do with a result that left its domain.
pub(crate) fn newton_raphson_step<F, Func, Deriv>(x: F, f: Func, d: Deriv) -> F
where
    F: Float,
    Func: Fn(F) -> F,
    Deriv: Fn(F) -> F,
{
    let dx = d(x);
    if dx == F::zero() {
        return x;
    }
    x - f(x) / dx
}
