//! Shared configuration for the iterative solvers.
//!
//! Provides [`SolverCfg`], the two universal knobs every solver takes:
//!
//! [`SolverCfg`]
//! ├ `tolerance`      : acceptance threshold — a candidate is a root when
//! │                    its residual is *strictly* below this value
//! └ `max_iterations` : hard cap on update attempts; exactly this many
//!                      are made before the solver reports not-found
//!
//! The bracket search has its own knobs (`step`, `growth`, `max_probes`)
//! and carries its own config next to the algorithm.

use super::errors::RootFindingError;

#[derive(Debug, Copy, Clone)]
pub struct SolverCfg {
    tolerance:      Option<f64>,
    max_iterations: Option<usize>,
}

impl SolverCfg {
    pub const DEFAULT_TOLERANCE: f64        = 1e-4;
    pub const DEFAULT_MAX_ITERATIONS: usize = 40;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_tolerance(mut self, v: f64) -> Self { self.tolerance = Some(v); self }
    pub fn with_max_iterations(mut self, v: usize) -> Self { self.max_iterations = Some(v); self }

    #[inline] #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(Self::DEFAULT_TOLERANCE)
    }

    #[inline] #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations.unwrap_or(Self::DEFAULT_MAX_ITERATIONS)
    }

    /// Resolve defaults and check both knobs.
    ///
    /// # Errors
    /// ├ [`RootFindingError::InvalidTolerance`]     - `tolerance` <= 0 or not finite
    /// └ [`RootFindingError::InvalidMaxIterations`] - `max_iterations` == 0
    pub fn validate(&self) -> Result<(f64, usize), RootFindingError> {
        let tolerance = self.tolerance();
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(RootFindingError::InvalidTolerance { got: tolerance });
        }

        let max_iterations = self.max_iterations();
        if max_iterations == 0 {
            return Err(RootFindingError::InvalidMaxIterations { got: max_iterations });
        }

        Ok((tolerance, max_iterations))
    }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            tolerance:      Some(Self::DEFAULT_TOLERANCE),
            max_iterations: Some(Self::DEFAULT_MAX_ITERATIONS),
        }
    }
}
