//! tests for the Newton-Raphson / tangent algorithm
use rootine::root_finding::algorithms::Algorithm;
use rootine::root_finding::config::SolverCfg;
use rootine::root_finding::newton::{newton_raphson, tangent, NewtonError};
use rootine::root_finding::report::FailureReason;

type TestResult = Result<(), NewtonError>;

#[test]
fn finds_sqrt_2_quadratically() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let res = newton_raphson(f, df, 1.0, SolverCfg::new())?;

    assert!(res.converged());
    assert!((res.root().unwrap() - 2.0_f64.sqrt()).abs() < 1e-4);
    // quadratic convergence: well under 10 iterations from x0 = 1
    assert!(res.iterations() < 10);
    assert_eq!(res.algorithm(), Algorithm::NewtonRaphson);
    Ok(())
}

#[test]
fn cubic_from_a_nearby_guess() -> TestResult {
    let f   = |x: f64| x * x * x - x - 2.0;
    let df  = |x: f64| 3.0 * x * x - 1.0;
    let res = newton_raphson(f, df, 1.5, SolverCfg::new())?;

    assert!(res.converged());
    assert!(res.residual().unwrap().abs() < 1e-4);
    assert!(res.iterations() < 10);
    Ok(())
}

#[test]
fn tangent_matches_newton_bit_for_bit() -> TestResult {
    let cfg = SolverCfg::new()
        .with_tolerance(1e-10)
        .with_max_iterations(50);

    let newton_res  = newton_raphson(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0, cfg)?;
    let tangent_res = tangent(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0, cfg)?;

    assert_eq!(newton_res.root(), tangent_res.root());
    assert_eq!(newton_res.iterations(), tangent_res.iterations());
    assert_eq!(newton_res.evaluations(), tangent_res.evaluations());

    // only the tag differs
    assert_eq!(newton_res.algorithm(), Algorithm::NewtonRaphson);
    assert_eq!(tangent_res.algorithm(), Algorithm::Tangent);
    Ok(())
}

#[test]
fn starting_on_a_root_still_costs_one_iteration() -> TestResult {
    // the tolerance test only runs after an update
    let res = newton_raphson(|x: f64| x, |_x: f64| 1.0, 0.0, SolverCfg::new())?;

    assert_eq!(res.root(), Some(0.0));
    assert_eq!(res.iterations(), 1);
    Ok(())
}

#[test]
fn vanishing_derivative_is_a_fault() {
    let err = newton_raphson(|x: f64| x * x - 2.0, |_x: f64| 0.0, 1.0, SolverCfg::new())
        .unwrap_err();

    assert!(matches!(err, NewtonError::DerivativeVanished { x } if x == 1.0));
}

#[test]
fn non_finite_derivative_is_a_fault() {
    let err = newton_raphson(|x: f64| x, |_x: f64| f64::NAN, 1.0, SolverCfg::new())
        .unwrap_err();

    assert!(matches!(err, NewtonError::DerivativeNotFinite { x, dfx } if x == 1.0 && dfx.is_nan()));
}

#[test]
fn constant_function_consumes_exact_budget() -> TestResult {
    let cfg = SolverCfg::new().with_max_iterations(7);
    let res = newton_raphson(|_x: f64| 1.0, |_x: f64| 1.0, 0.0, cfg)?;

    assert_eq!(res.failure(), Some(FailureReason::IterationLimit));
    assert_eq!(res.iterations(), 7);
    // seed f(x0) plus one derivative and one function call per iteration
    assert_eq!(res.evaluations(), 15);
    Ok(())
}

#[test]
fn rejects_non_finite_guess() {
    let err = newton_raphson(|x: f64| x, |_x: f64| 1.0, f64::INFINITY, SolverCfg::new())
        .unwrap_err();

    assert!(matches!(err, NewtonError::InvalidGuess { x0 } if x0.is_infinite()));
}
