//! tests for fixed-point iteration
use rootine::root_finding::config::SolverCfg;
use rootine::root_finding::errors::RootFindingError;
use rootine::root_finding::fixed_point::{fixed_point_iteration, FixedPointError};
use rootine::root_finding::report::FailureReason;

type TestResult = Result<(), FixedPointError>;

#[test]
fn converges_to_the_cosine_fixed_point() -> TestResult {
    let res = fixed_point_iteration(|x: f64| x.cos(), 1.0, SolverCfg::new())?;

    assert!(res.converged());
    // dottie number, g(x) = cos x
    assert!((res.root().unwrap() - 0.739_085_133_2).abs() < 1e-3);
    assert!(res.residual().unwrap().abs() < 1e-4);
    Ok(())
}

#[test]
fn babylonian_sqrt_2_reformulation() -> TestResult {
    // x = (x + 2/x) / 2 is the contractive rewrite of x^2 - 2 = 0
    let g   = |x: f64| 0.5 * (x + 2.0 / x);
    let res = fixed_point_iteration(g, 1.0, SolverCfg::new())?;

    assert!(res.converged());
    assert!((res.root().unwrap() - 2.0_f64.sqrt()).abs() < 1e-4);
    assert!(res.iterations() <= 5);
    Ok(())
}

#[test]
fn probe_evaluation_is_part_of_the_contract() -> TestResult {
    // every iteration applies the map twice: once to step, once to test
    // the value just produced
    let mut calls = 0;
    let res = fixed_point_iteration(
        |x: f64| { calls += 1; x.cos() },
        1.0,
        SolverCfg::new(),
    )?;

    assert_eq!(res.evaluations(), calls);
    assert_eq!(res.evaluations(), 2 * res.iterations());
    Ok(())
}

#[test]
fn divergent_map_consumes_exact_budget() -> TestResult {
    let cfg = SolverCfg::new().with_max_iterations(15);
    let res = fixed_point_iteration(|x: f64| x + 1.0, 0.0, cfg)?;

    assert_eq!(res.failure(), Some(FailureReason::IterationLimit));
    assert_eq!(res.iterations(), 15);
    assert_eq!(res.evaluations(), 30);
    Ok(())
}

#[test]
fn rejects_non_finite_guess() {
    let err = fixed_point_iteration(|x: f64| x, f64::NAN, SolverCfg::new()).unwrap_err();
    assert!(matches!(err, FixedPointError::InvalidGuess { x0 } if x0.is_nan()));
}

#[test]
fn non_finite_map_value_is_a_fault() {
    let err = fixed_point_iteration(|x: f64| 1.0 / x, 0.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        FixedPointError::Common(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.0 && fx.is_infinite()));
}
