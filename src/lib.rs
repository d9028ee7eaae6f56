//! Numerical routines for scalar equations.
//!
//! The crate ships one module, [`root_finding`]: a flat collection of
//! independent, pure iterative solvers for `f(x) = 0`.
//!
//! ┌ bracketing methods — need an interval with a sign change
//! │   ├ [`root_finding::bisection`]
//! │   └ [`root_finding::false_position`]
//! ├ open methods — need one or two starting guesses
//! │   ├ [`root_finding::newton`] (Newton-Raphson and tangent)
//! │   ├ [`root_finding::secant`]
//! │   └ [`root_finding::fixed_point`]
//! └ helpers
//!     ├ [`root_finding::derivative`] — forward-difference estimate
//!     └ [`root_finding::bracket`]    — expanding sign-change search,
//!       feeds the bracketing methods
//!
//! Every solver is stateless and synchronous: it takes the function (and
//! for derivative-based methods its derivative) as a plain callable plus
//! a small config, and returns either a converged estimate or an
//! explicit not-found outcome. Nothing is shared between calls.

pub mod root_finding;
