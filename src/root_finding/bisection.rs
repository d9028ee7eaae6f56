use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{FailureReason, RootOutcome};
use super::signs::opposite_sign;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bisection;

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}

/// Midpoint of [a, b], computed as an offset to stay inside the interval.
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Assumes `func` is continuous on `[a, b]` and that `func(a)` and
/// `func(b)` have opposite signs. The sign-change precondition is the
/// caller's responsibility and is deliberately *not* checked here; on a
/// same-sign interval the interval update degenerates to a one-sided
/// march and the run ends in the not-found sentinel. Use
/// [`false_position`](super::false_position::false_position) for a
/// solver that rejects an invalid bracket up front, or
/// [`bracket_of`](super::bracket::bracket_of) to locate a valid interval
/// first.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the search interval. Must be finite and greater than `a`.
/// └ `cfg`  - [`SolverCfg`] with `tolerance` and `max_iterations`.
///    Defaults:
///    ├ cfg.tolerance      = 1e-4
///    └ cfg.max_iterations = 40
///
/// # Returns
///
/// ├ [`RootOutcome::Converged`] - midpoint `c` with `|f(c)| < tolerance`,
/// │                              plus iteration and evaluation counts.
/// └ [`RootOutcome::NotFound`]  - budget exhausted; exactly
///                                `max_iterations` midpoints were tried.
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBounds`] - `a` or `b` is NaN/inf, or `a >= b`.
/// │
/// │ Propagated via [`BisectionError::Common`]:
/// ├ [`RootFindingError::NonFiniteEvaluation`]  - `func(x)` produced NaN or inf.
/// ├ [`RootFindingError::InvalidTolerance`]     - `cfg.tolerance` <= 0 or not finite.
/// └ [`RootFindingError::InvalidMaxIterations`] - `cfg.max_iterations` == 0.
///
/// # Notes
/// ├ Convergence is linear: the bracket halves every iteration.
/// └ `f(a)` is evaluated once and carried; each iteration costs one
///   evaluation of `func`.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: SolverCfg,
) -> Result<RootOutcome, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let (tolerance, max_iterations) = cfg.validate()?;

    // number of function evaluations
    let mut evaluations = 0;

    // closure function, checks finiteness
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        let fx = { evaluations += 1; func(x) };
        if !fx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        } else {
            Ok(fx)
        }
    };

    // f(a) carried across iterations; replaced whenever a moves
    let mut fa = eval(a)?;

    for iteration in 1..=max_iterations {
        let c  = midpoint(a, b);
        let fc = eval(c)?;

        if fc.abs() < tolerance {
            return Ok(RootOutcome::Converged {
                root        : c,
                residual    : fc,
                iterations  : iteration,
                evaluations,
                algorithm   : ALGORITHM,
            });
        }

        // shrink towards the half that keeps the sign change
        if opposite_sign(fc, fa) {
            b = c;
        } else {
            a  = c;
            fa = fc;
        }
    }

    Ok(RootOutcome::NotFound {
        reason      : FailureReason::IterationLimit,
        iterations  : max_iterations,
        evaluations,
        algorithm   : ALGORITHM,
    })
}
