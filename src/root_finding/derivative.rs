//! Forward-difference derivative estimation.

/// Default step width for [`num_derivative`].
pub const DEFAULT_STEP: f64 = 1e-6;

/// Estimates `f'(x0)` with the first-order forward-difference quotient
/// `(f(x0 + h) - f(x0)) / h`.
///
/// # Arguments
/// - `func` : the function to differentiate
/// - `x0`   : point at which the slope is estimated
/// - `h`    : step width; `None` uses [`DEFAULT_STEP`]
///
/// # Notes
/// - Total function, no failure mode: a non-finite `func` value flows
///   straight through to the returned quotient.
/// - Truncation error is first-order in `h`; there is no adaptive
///   step-size refinement.
pub fn num_derivative<F>(mut func: F, x0: f64, h: Option<f64>) -> f64
where F: FnMut(f64) -> f64 {
    let h = h.unwrap_or(DEFAULT_STEP);
    (func(x0 + h) - func(x0)) / h
}
