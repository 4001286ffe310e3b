//! End-to-end runs through the facade.

use fuzzyforge::prelude::*;
use fuzzyforge::{BacktrackingConfig, ConsistencyType, FuzzyForgeError, ZeroAppropriatenessPolicy};
use fuzzyforge_test::{chain, coloring, scenario};

#[test]
fn test_scenario_outcome() {
    let problem = scenario::two_by_two();
    let outcome = run_solver(&problem, &SolverConfig::default()).unwrap();

    assert_eq!(outcome.heuristic.instantiation, vec![1, 1]);
    assert_eq!(outcome.heuristic.joint_degree, 1.0);
    assert_eq!(outcome.backtracking, Some(vec![1, 1]));
    assert_eq!(outcome.stats.heuristic_steps, 2);
    assert_eq!(outcome.stats.nodes_explored, 2);
}

#[test]
fn test_coloring_with_min_appropriateness() {
    let problem = coloring::triangle();
    let config = SolverConfig::new()
        .with_joint_constraint_type(JointConstraintType::Min)
        .with_backtracking(BacktrackingConfig {
            consistency: ConsistencyType::MinAppropriateness,
            threshold: 0.0,
        });

    let outcome = run_solver(&problem, &config).unwrap();
    assert_eq!(outcome.heuristic.joint_degree, 1.0);
    assert_eq!(
        outcome.backtracking,
        Some(vec!["red", "green", "blue"])
    );
}

#[test]
fn test_config_from_toml() {
    let config = SolverConfig::from_toml_str(
        r#"
        joint_constraint_type = "average"

        [heuristic]
        zero_appropriateness = "fail"
        "#,
    )
    .unwrap();
    let problem = chain::chain_problem(4, 3);

    let err = run_solver(&problem, &config).unwrap_err();
    assert!(matches!(err, FuzzyForgeError::NoViableValue(_)));
    assert_eq!(
        config.heuristic.zero_appropriateness,
        ZeroAppropriatenessPolicy::Fail
    );
}

#[test]
fn test_invalid_problem_is_rejected() {
    let problem = FuzzyProblem::new()
        .with_variable("x", [1, 2])
        .with_variable("y", [1, 2])
        .with_constraint(FuzzyConstraint::new("bad").with_entry(vec![Some(1), Some(3)], 1.0));

    let err = run_solver(&problem, &SolverConfig::default()).unwrap_err();
    assert!(matches!(err, FuzzyForgeError::InvalidProblem(_)));
}

#[test]
fn test_invalid_config_is_rejected() {
    let problem = scenario::two_by_two();
    let config = SolverConfig::new().with_max_enumeration(0);

    let err = run_solver(&problem, &config).unwrap_err();
    assert!(matches!(err, FuzzyForgeError::Config(_)));
}

#[test]
fn test_solve_without_config_file_uses_defaults() {
    let problem = scenario::two_by_two();
    let outcome = solve(&problem).unwrap();
    assert_eq!(outcome.heuristic.instantiation, vec![1, 1]);
}
