//! tests for the false position (regula falsi) algorithm
use rootine::root_finding::config::SolverCfg;
use rootine::root_finding::errors::RootFindingError;
use rootine::root_finding::false_position::{false_position, FalsePositionError};
use rootine::root_finding::report::FailureReason;

type TestResult = Result<(), FalsePositionError>;

#[test]
fn finds_sqrt_2_with_defaults() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = false_position(f, 0.0, 2.0, SolverCfg::new())?;

    assert!(res.converged());
    assert!((res.root().unwrap() - 2.0_f64.sqrt()).abs() < 1e-4);
    assert!(res.iterations() > 0 && res.iterations() <= 40);
    Ok(())
}

#[test]
fn linear_interpolation_hits_exactly() -> TestResult {
    // the secant line through (0, -6) and (10, 14) crosses at x = 3
    let f   = |x: f64| 2.0 * x - 6.0;
    let res = false_position(f, 0.0, 10.0, SolverCfg::new())?;

    assert_eq!(res.root(), Some(3.0));
    assert_eq!(res.iterations(), 1);
    assert_eq!(res.evaluations(), 3);
    Ok(())
}

#[test]
fn same_sign_endpoints_are_the_sentinel() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let res = false_position(f, -1.0, 1.0, SolverCfg::new())?;

    assert!(!res.converged());
    assert_eq!(res.failure(), Some(FailureReason::NoSignChange));
    assert_eq!(res.iterations(), 0);
    assert_eq!(res.evaluations(), 2);
    Ok(())
}

#[test]
fn endpoint_zero_is_the_sentinel() -> TestResult {
    // f(a) * f(b) >= 0 includes an exact zero at an endpoint
    let f   = |x: f64| x;
    let res = false_position(f, 0.0, 5.0, SolverCfg::new())?;

    assert_eq!(res.failure(), Some(FailureReason::NoSignChange));
    assert_eq!(res.iterations(), 0);
    Ok(())
}

#[test]
fn budget_exhausted_reports_exact_count() -> TestResult {
    let cfg = SolverCfg::new()
        .with_tolerance(1e-15)
        .with_max_iterations(3);
    let res = false_position(|x: f64| x * x - 2.0, 0.0, 2.0, cfg)?;

    assert_eq!(res.failure(), Some(FailureReason::IterationLimit));
    assert_eq!(res.iterations(), 3);
    Ok(())
}

#[test]
fn detects_invalid_bounds() {
    let err = false_position(|x: f64| x, 1.0, -1.0, SolverCfg::new()).unwrap_err();
    assert!(matches!(err, FalsePositionError::InvalidBounds { .. }));
}

#[test]
fn pole_inside_bracket_is_a_fault() {
    // sign change across the pole at 0.5, interpolation lands on it
    let f   = |x: f64| 1.0 / (x - 0.5);
    let err = false_position(f, 0.0, 1.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        FalsePositionError::Common(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.5 && fx.is_infinite()));
}
