use super::errors::RootFindingError;
use super::report::BracketOutcome;
use super::signs::opposite_sign;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BracketError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid start: x={x} must be finite")]
    InvalidStart { x: f64 },

    #[error("invalid step: must be finite and nonzero. got {got}")]
    InvalidStep { got: f64 },

    #[error("invalid growth factor: must be finite and > 1. got {got}")]
    InvalidGrowth { got: f64 },

    #[error("invalid max_probes: must be >= 1. got {got}")]
    InvalidMaxProbes { got: usize },
}

/// Bracket search configuration.
///
/// # Defaults
///
/// ┌ DEFAULT_STEP       - initial probe step
/// ├ DEFAULT_GROWTH     - geometric step expansion factor
/// └ DEFAULT_MAX_PROBES - probe budget
///
/// # Validation:
/// └ Performed in [`bracket_of`] via [`BracketCfg::validate()`]:
///    ├ `step` finite and nonzero (sign only sets the initial direction)
///    ├ `growth` finite and > 1
///    └ `max_probes` >= 1
#[derive(Debug, Copy, Clone)]
pub struct BracketCfg {
    step:       Option<f64>,
    growth:     Option<f64>,
    max_probes: Option<usize>,
}

impl BracketCfg {
    pub const DEFAULT_STEP: f64       = 0.1;
    pub const DEFAULT_GROWTH: f64     = 2.0;
    pub const DEFAULT_MAX_PROBES: usize = 1000;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_step(mut self, v: f64) -> Self { self.step = Some(v); self }
    pub fn with_growth(mut self, v: f64) -> Self { self.growth = Some(v); self }
    pub fn with_max_probes(mut self, v: usize) -> Self { self.max_probes = Some(v); self }

    #[inline] #[must_use]
    pub fn step(&self) -> f64 { self.step.unwrap_or(Self::DEFAULT_STEP) }

    #[inline] #[must_use]
    pub fn growth(&self) -> f64 { self.growth.unwrap_or(Self::DEFAULT_GROWTH) }

    #[inline] #[must_use]
    pub fn max_probes(&self) -> usize { self.max_probes.unwrap_or(Self::DEFAULT_MAX_PROBES) }

    pub fn validate(&self) -> Result<(f64, f64, usize), BracketError> {
        let step = self.step();
        if !step.is_finite() || step == 0.0 {
            return Err(BracketError::InvalidStep { got: step });
        }

        let growth = self.growth();
        if !(growth.is_finite() && growth > 1.0) {
            return Err(BracketError::InvalidGrowth { got: growth });
        }

        let max_probes = self.max_probes();
        if max_probes == 0 {
            return Err(BracketError::InvalidMaxProbes { got: max_probes });
        }

        Ok((step, growth, max_probes))
    }
}

impl Default for BracketCfg {
    fn default() -> Self {
        Self {
            step:       Some(Self::DEFAULT_STEP),
            growth:     Some(Self::DEFAULT_GROWTH),
            max_probes: Some(Self::DEFAULT_MAX_PROBES),
        }
    }
}

/// Searches outward from `x` for an interval on which `func` changes
/// sign, expanding the step geometrically after every failed probe.
///
/// Intended to feed the bracketing solvers
/// ([`bisection`](super::bisection::bisection),
/// [`false_position`](super::false_position::false_position)) when no
/// valid interval is known a priori.
///
/// # Arguments
/// - `func` : the function to bracket
/// - `x`    : finite starting point
/// - `cfg`  : [`BracketCfg`] (`step` default 0.1, `growth` default 2.0,
///            `max_probes` default 1000)
///
/// # Returns
/// - [`BracketOutcome::Found`]     : endpoints ordered `low < high` with
///   a sign change between the last two probes inside them
/// - [`BracketOutcome::Exhausted`] : probe budget spent without a sign
///   change; no bracket exists within the probed range
///
/// # Errors
/// - [`BracketError::InvalidStart`]     : `x` non-finite
/// - [`BracketError::InvalidStep`]      : `step` zero or non-finite
/// - [`BracketError::InvalidGrowth`]    : `growth` <= 1 or non-finite
/// - [`BracketError::InvalidMaxProbes`] : `max_probes` == 0
///
/// * Propagated via [`BracketError::Common`]:
/// - [`RootFindingError::NonFiniteEvaluation`] : `func` produced NaN/inf
///   at a probe point
///
/// # Behavior
/// - Two seed evaluations at `a = x` and `b = x + step`. If the second
///   is the larger (`f(b) > f(a)`), the walk is pointing away from a
///   descent toward zero, so the pair is swapped and the step negated.
/// - Each probe evaluates `c = b + step`; a sign change between `f(c)`
///   and `f(b)` ends the search with the window `(a, c)`. Otherwise the
///   triple slides forward and the step grows by `growth`, so the probed
///   range expands exponentially.
pub fn bracket_of<F>(
    mut func: F,
    x: f64,
    cfg: BracketCfg,
) -> Result<BracketOutcome, BracketError>
where F: FnMut(f64) -> f64 {

    if !x.is_finite() {
        return Err(BracketError::InvalidStart { x });
    }

    let (mut step, growth, max_probes) = cfg.validate()?;

    let mut evaluations = 0;

    let mut eval = |x: f64| -> Result<f64, BracketError> {
        let fx = { evaluations += 1; func(x) };
        if !fx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        } else {
            Ok(fx)
        }
    };

    let mut a  = x;
    let mut fa = eval(a)?;
    let mut b  = a + step;
    let mut fb = eval(b)?;

    // ascending start: walk the other way
    if fb > fa {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
        step = -step;
    }

    for probe in 1..=max_probes {
        let c  = b + step;
        let fc = eval(c)?;

        if opposite_sign(fc, fb) {
            let (low, high) = if a < c { (a, c) } else { (c, a) };
            return Ok(BracketOutcome::Found {
                low,
                high,
                probes: probe,
                evaluations,
            });
        }

        // slide the window and expand
        a = b;
        b = c;
        fb = fc;
        step *= growth;
    }

    Ok(BracketOutcome::Exhausted {
        probes: max_probes,
        evaluations,
    })
}
