//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : runtime errors shared by every solver
//! │   ├ non-finite function evaluation (arithmetic/domain fault)
//! │   └ invalid global parameters (tolerance, max_iterations)
//! │
//! └ method-specific enums (e.g. `BisectionError`, `NewtonError`) live
//!   next to their algorithm and wrap [`RootFindingError`] transparently.
//!
//! Non-convergence is *not* an error: an exhausted iteration budget is
//! reported in-band as the not-found outcome (see the report module).

use thiserror::Error;

/// Runtime errors shared by every iterative solver.
///
/// ┌ Non-finite function evaluation
/// └ Invalid global configuration (tolerance, max_iterations)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iterations: must be >= 1. got {got}")]
    InvalidMaxIterations { got: usize },
}
