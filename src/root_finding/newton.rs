//! Newton-Raphson method, also callable under its tangent-method name.

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{FailureReason, RootOutcome};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("derivative vanished at x={x}: update step undefined")]
    DerivativeVanished { x: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },
}

/// Helpers
/// - `eval_fx`  : evaluates `f(x)` with finite-check
/// - `eval_dfx` : evaluates the user-supplied derivative with finite-check
#[inline]
fn eval_fx<F>(
    func: &mut F,
    x: f64,
    evaluations: &mut usize,
) -> Result<f64, NewtonError>
where F: FnMut(f64) -> f64 {
    let fx = { *evaluations += 1; func(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }
    Ok(fx)
}

#[inline]
fn eval_dfx<G>(
    dfunc: &mut G,
    x: f64,
    evaluations: &mut usize,
) -> Result<f64, NewtonError>
where G: FnMut(f64) -> f64 {
    let dfx = { *evaluations += 1; dfunc(x) };
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }
    Ok(dfx)
}

/// One loop for both public names. The tolerance test runs after each
/// update, never on the initial guess.
fn newton_loop<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: SolverCfg,
    algorithm: Algorithm,
) -> Result<RootOutcome, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    let (tolerance, max_iterations) = cfg.validate()?;

    let mut evaluations = 0;

    let mut x  = x0;
    let mut fx = eval_fx(&mut func, x, &mut evaluations)?;

    for iteration in 1..=max_iterations {
        let dfx = eval_dfx(&mut dfunc, x, &mut evaluations)?;
        if dfx == 0.0 {
            // division fault: surfaced, never papered over with a
            // fallback step
            return Err(NewtonError::DerivativeVanished { x });
        }

        x  = x - fx / dfx;
        fx = eval_fx(&mut func, x, &mut evaluations)?;

        if fx.abs() < tolerance {
            return Ok(RootOutcome::Converged {
                root        : x,
                residual    : fx,
                iterations  : iteration,
                evaluations,
                algorithm,
            });
        }
    }

    Ok(RootOutcome::NotFound {
        reason      : FailureReason::IterationLimit,
        iterations  : max_iterations,
        evaluations,
        algorithm,
    })
}

/// Finds a root of `func` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method)
/// with a caller-supplied analytic derivative.
///
/// # Arguments
/// - `func`          : function whose root is sought
/// - `derivative`    : derivative of `func`
/// - `initial_guess` : finite starting point
/// - `cfg`           : [`SolverCfg`] (`tolerance` default 1e-4,
///                     `max_iterations` default 40)
///
/// # Returns
/// - [`RootOutcome::Converged`] : iterate `x` with `|f(x)| < tolerance`
/// - [`RootOutcome::NotFound`]  : budget exhausted after exactly
///                                `max_iterations` updates
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]        : `initial_guess` non-finite
/// - [`NewtonError::DerivativeVanished`]  : `derivative(x) == 0`; the
///   `f(x)/f'(x)` step is undefined and the fault propagates
/// - [`NewtonError::DerivativeNotFinite`] : `derivative(x)` NaN/inf
///
/// * Propagated via [`NewtonError::Common`]:
/// - [`RootFindingError::NonFiniteEvaluation`]  : `func(x)` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]     : `tolerance` <= 0 or inf
/// - [`RootFindingError::InvalidMaxIterations`] : `max_iterations` == 0
///
/// # Behavior
/// - Update `x <- x - f(x)/f'(x)`, then test `|f(x)| < tolerance`. The
///   initial guess itself is never tested, so a run that starts on a
///   root still reports one iteration.
/// - Convergence is quadratic near a simple root but *local only*: a
///   poor guess can cycle or diverge. For guaranteed convergence start
///   from a bracket and use
///   [`bisection`](super::bisection::bisection).
pub fn newton_raphson<F, G>(
    func: F,
    derivative: G,
    initial_guess: f64,
    cfg: SolverCfg,
) -> Result<RootOutcome, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    newton_loop(func, derivative, initial_guess, cfg, Algorithm::NewtonRaphson)
}

/// The tangent method: [`newton_raphson`] under its other traditional
/// name. Drives the identical loop, so results match bit for bit; only
/// the reported [`Algorithm`] tag differs.
pub fn tangent<F, G>(
    func: F,
    derivative: G,
    initial_guess: f64,
    cfg: SolverCfg,
) -> Result<RootOutcome, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    newton_loop(func, derivative, initial_guess, cfg, Algorithm::Tangent)
}
