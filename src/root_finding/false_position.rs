use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{FailureReason, RootOutcome};
use super::signs::{opposite_sign, same_sign};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::FalsePosition;

#[derive(Debug, Error)]
pub enum FalsePositionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("secant denominator f(b) - f(a) collapsed: fa={fa}, fb={fb}")]
    DegenerateSecantStep { fa: f64, fb: f64 },
}

/// x-intercept of the secant line through `(a, fa)` and `(b, fb)`.
///
/// # Returns
/// ├ `Ok(c)` - the interpolated point, if representable
/// └ `Err(DegenerateSecantStep)` - denominator collapse made `c` non-finite
#[inline]
fn secant_x_intercept(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
) -> Result<f64, FalsePositionError> {
    let c = (a * fb - b * fa) / (fb - fa);
    if !c.is_finite() {
        return Err(FalsePositionError::DegenerateSecantStep { fa, fb });
    }
    Ok(c)
}

/// Finds a root of a function using the
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi)
/// (regula falsi).
///
/// Same interval-shrinking scheme as
/// [`bisection`](super::bisection::bisection), but the candidate is the
/// secant-line x-intercept instead of the midpoint, and the sign-change
/// precondition *is* checked: an interval where `f(a)` and `f(b)` do not
/// straddle zero (including an exact zero at either endpoint) yields the
/// not-found sentinel immediately, with zero iterations consumed.
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
/// ├ [`RootOutcome::Converged`] - interpolated point `c` with `|f(c)| < tolerance`.
/// ├ [`RootOutcome::NotFound`] with [`FailureReason::NoSignChange`]
/// │                            - precondition failed; `iterations == 0`.
/// └ [`RootOutcome::NotFound`] with [`FailureReason::IterationLimit`]
///                              - budget exhausted after exactly
///                                `max_iterations` interpolations.
///
/// # Errors
///
/// ┌ [`FalsePositionError::InvalidBounds`]        - `a` or `b` is NaN/inf, or `a >= b`.
/// ├ [`FalsePositionError::DegenerateSecantStep`] - interpolated point not finite.
/// │
/// │ Propagated via [`FalsePositionError::Common`]:
/// ├ [`RootFindingError::NonFiniteEvaluation`]  - `func(x)` produced NaN or inf.
/// ├ [`RootFindingError::InvalidTolerance`]     - `cfg.tolerance` <= 0 or not finite.
/// └ [`RootFindingError::InvalidMaxIterations`] - `cfg.max_iterations` == 0.
///
/// # Notes
/// └ On strongly convex or concave functions one endpoint can stall and
///   never move, which slows convergence to linear. Accepted behavior.
pub fn false_position<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: SolverCfg,
) -> Result<RootOutcome, FalsePositionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(FalsePositionError::InvalidBounds { a, b });
    }

    let (tolerance, max_iterations) = cfg.validate()?;

    let mut evaluations = 0;

    let mut eval = |x: f64| -> Result<f64, FalsePositionError> {
        let fx = { evaluations += 1; func(x) };
        if !fx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        } else {
            Ok(fx)
        }
    };

    let mut fa = eval(a)?;
    let mut fb = eval(b)?;

    // f(a) * f(b) >= 0 is an invalid bracket: same-sign endpoints, or an
    // exact zero at either end. Sentinel, not a fault.
    if same_sign(fa, fb) || fa == 0.0 || fb == 0.0 {
        return Ok(RootOutcome::NotFound {
            reason      : FailureReason::NoSignChange,
            iterations  : 0,
            evaluations,
            algorithm   : ALGORITHM,
        });
    }

    for iteration in 1..=max_iterations {
        let c  = secant_x_intercept((a, fa), (b, fb))?;
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

        // same endpoint-replacement rule as bisection
        if opposite_sign(fc, fa) {
            b  = c;
            fb = fc;
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
