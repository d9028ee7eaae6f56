use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{FailureReason, RootOutcome};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Secant;

#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid initial guesses: x0 and x1 must be finite and distinct. got x0={x0}, x1={x1}")]
    InvalidGuesses { x0: f64, x1: f64 },

    #[error("degenerate secant step: f(x0) == f(x1) == {fx} at x0={x0}, x1={x1}")]
    DegenerateSecantStep { x0: f64, x1: f64, fx: f64 },
}

/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// Derivative-free Newton variant: the slope is approximated from the
/// two most recent iterates, then the window slides forward.
///
/// # Arguments
/// - `func` : the function whose root is to be found
/// - `x0`   : first initial guess. Must be finite and not equal to `x1`
/// - `x1`   : second initial guess. Must be finite and not equal to `x0`
/// - `cfg`  : [`SolverCfg`] (`tolerance` default 1e-4,
///            `max_iterations` default 40)
///
/// # Returns
/// - [`RootOutcome::Converged`] : iterate `x2` with `|f(x2)| < tolerance`
/// - [`RootOutcome::NotFound`]  : budget exhausted after exactly
///                                `max_iterations` secant steps
///
/// # Errors
/// - [`SecantError::InvalidGuesses`]      : `x0`/`x1` NaN/inf or equal
/// - [`SecantError::DegenerateSecantStep`] : `f(x1) == f(x0)`; the
///   divided difference is zero and the fault propagates, no fallback
///   step is substituted
///
/// * Propagated via [`SecantError::Common`]:
/// - [`RootFindingError::NonFiniteEvaluation`]  : `func(x)` produced NaN/inf
/// - [`RootFindingError::InvalidTolerance`]     : `tolerance` <= 0 or inf
/// - [`RootFindingError::InvalidMaxIterations`] : `max_iterations` == 0
///
/// # Behavior
/// - Update: `x2 = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))`, test
///   `|f(x2)| < tolerance`, then slide `x0 <- x1`, `x1 <- x2`.
/// - `f(x0)` and `f(x1)` are evaluated once up front; each iteration
///   costs a single evaluation of `func`.
///
/// # Notes
/// - Convergence is superlinear (order ~1.618) near a simple root, but
///   needs two reasonable starting guesses. For guaranteed convergence
///   use a bracketed method.
pub fn secant<F>(
    mut func: F,
    mut x0: f64,
    mut x1: f64,
    cfg: SolverCfg,
) -> Result<RootOutcome, SecantError>
where F: FnMut(f64) -> f64 {

    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(SecantError::InvalidGuesses { x0, x1 });
    }

    let (tolerance, max_iterations) = cfg.validate()?;

    let mut evaluations = 0;

    let mut eval = |x: f64| -> Result<f64, SecantError> {
        let fx = { evaluations += 1; func(x) };
        if !fx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        } else {
            Ok(fx)
        }
    };

    let mut fx0 = eval(x0)?;
    let mut fx1 = eval(x1)?;

    for iteration in 1..=max_iterations {
        if fx1 == fx0 {
            return Err(SecantError::DegenerateSecantStep { x0, x1, fx: fx1 });
        }

        let x2  = x1 - fx1 * (x1 - x0) / (fx1 - fx0);
        let fx2 = eval(x2)?;

        if fx2.abs() < tolerance {
            return Ok(RootOutcome::Converged {
                root        : x2,
                residual    : fx2,
                iterations  : iteration,
                evaluations,
                algorithm   : ALGORITHM,
            });
        }

        // slide the two-point window
        x0  = x1;
        fx0 = fx1;
        x1  = x2;
        fx1 = fx2;
    }

    Ok(RootOutcome::NotFound {
        reason      : FailureReason::IterationLimit,
        iterations  : max_iterations,
        evaluations,
        algorithm   : ALGORITHM,
    })
}
