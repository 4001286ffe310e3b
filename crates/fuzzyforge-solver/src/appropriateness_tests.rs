//! Tests for the appropriateness lookahead.

use super::*;
use fuzzyforge_config::SolverConfig;
use fuzzyforge_core::{FuzzyProblem, JointConstraintType};
use fuzzyforge_test::{brute_force, random, scenario};

#[test]
fn test_scenario_single_fix() {
    let problem = scenario::two_by_two();
    let solver = FuzzySolver::new(&problem);

    assert_eq!(solver.appropriateness(&["x"], &[1]).unwrap(), 1.0);
    assert_eq!(solver.appropriateness(&["x"], &[2]).unwrap(), 0.5);
    assert_eq!(solver.appropriateness(&["y"], &[2]).unwrap(), 0.5);
}

#[test]
fn test_scenario_full_fix() {
    let problem = scenario::two_by_two();
    let solver = FuzzySolver::new(&problem);

    assert_eq!(solver.appropriateness(&["x", "y"], &[1, 1]).unwrap(), 1.0);
    assert_eq!(solver.appropriateness(&["x", "y"], &[1, 2]).unwrap(), 0.0);
    assert_eq!(solver.appropriateness(&["y", "x"], &[2, 2]).unwrap(), 0.5);
}

#[test]
fn test_no_fix_equals_exhaustive_maximum() {
    for seed in 0..25 {
        let problem = random::random_problem(seed, 4, 3, 3);
        for joint_type in JointConstraintType::ALL {
            let config = SolverConfig::new().with_joint_constraint_type(joint_type);
            let solver = FuzzySolver::with_config(&problem, &config).unwrap();

            let appropriateness = solver.appropriateness(&[], &[]).unwrap();
            let expected = brute_force::max_joint_degree(&problem, joint_type);
            assert_eq!(
                appropriateness, expected,
                "seed {seed}, joint type {joint_type}"
            );
        }
    }
}

#[test]
fn test_unmentioned_variable_has_zero_appropriateness() {
    // Only y and z are constrained; fixing x alone leaves no relevant constraint.
    let problem = FuzzyProblem::new()
        .with_variable("x", ['a', 'b'])
        .with_variable("y", ['a', 'b'])
        .with_variable("z", ['a', 'b'])
        .with_constraint(
            FuzzyConstraint::new("yz").with_entry(vec![None, Some('a'), Some('b')], 0.9),
        );
    let solver = FuzzySolver::new(&problem);

    assert_eq!(solver.appropriateness(&["x"], &['a']).unwrap(), 0.0);
    assert_eq!(solver.appropriateness(&["y"], &['a']).unwrap(), 0.9);
}

#[test]
fn test_more_fixes_than_arity_uses_all_constraints() {
    let problem = FuzzyProblem::new()
        .with_variable("x", ['a', 'b'])
        .with_variable("y", ['a', 'b'])
        .with_variable("z", ['a', 'b'])
        .with_constraint(
            FuzzyConstraint::new("yz").with_entry(vec![None, Some('a'), Some('b')], 0.9),
        );
    let solver = FuzzySolver::new(&problem);

    // Arity is 2, so fixing x and y still filters, and yz does not mention x.
    assert_eq!(solver.appropriateness(&["x", "y"], &['a', 'a']).unwrap(), 0.0);
    // Three fixes exceed the arity; yz now takes part.
    assert_eq!(
        solver
            .appropriateness(&["x", "y", "z"], &['a', 'a', 'b'])
            .unwrap(),
        0.9
    );
}

#[test]
fn test_difficulty_and_appropriateness() {
    let problem = scenario::two_by_two();
    let solver = FuzzySolver::new(&problem);

    let (difficulty, per_value) = solver
        .difficulty_and_appropriateness(&"x", &FixedAssignment::new())
        .unwrap();
    assert_eq!(difficulty, 1.5);
    assert_eq!(per_value, vec![(1, 1.0), (2, 0.5)]);

    let mut fixed = FixedAssignment::new();
    fixed.insert("x", 1);
    let (difficulty, per_value) = solver.difficulty_and_appropriateness(&"y", &fixed).unwrap();
    assert_eq!(difficulty, 1.0);
    assert_eq!(per_value, vec![(1, 1.0), (2, 0.0)]);
}

#[test]
fn test_mismatched_lengths_rejected() {
    let problem = scenario::two_by_two();
    let solver = FuzzySolver::new(&problem);

    assert!(matches!(
        solver.appropriateness(&["x", "y"], &[1]),
        Err(FuzzyForgeError::InvalidArgument(_))
    ));
}

#[test]
fn test_unknown_variable_rejected() {
    let problem = scenario::two_by_two();
    let solver = FuzzySolver::new(&problem);

    assert!(matches!(
        solver.appropriateness(&["w"], &[1]),
        Err(FuzzyForgeError::InvalidArgument(_))
    ));
    assert!(matches!(
        solver.difficulty_and_appropriateness(&"w", &FixedAssignment::new()),
        Err(FuzzyForgeError::InvalidArgument(_))
    ));
}

#[test]
fn test_enumeration_limit() {
    let problem = random::random_problem(7, 3, 3, 2);
    let config = SolverConfig::new().with_max_enumeration(5);
    let solver = FuzzySolver::with_config(&problem, &config).unwrap();

    let err = solver.appropriateness(&[], &[]).unwrap_err();
    assert_eq!(
        err,
        FuzzyForgeError::EnumerationLimit {
            candidates: 27,
            limit: 5
        }
    );

    // Fixing two of three variables leaves three candidates.
    assert!(solver.appropriateness(&[0, 1], &[0, 0]).is_ok());
}

#[test]
fn test_counts_candidates() {
    let problem = scenario::two_by_two();
    let solver = FuzzySolver::new(&problem);

    solver.appropriateness(&[], &[]).unwrap();
    solver.appropriateness(&["x"], &[1]).unwrap();

    let stats = solver.stats();
    assert_eq!(stats.appropriateness_queries, 2);
    assert_eq!(stats.instantiations_evaluated, 6);
}

#[test]
fn test_candidate_instantiations() {
    let a = [1, 2];
    let b = [3];
    let c = [4, 5];
    let choices: Vec<&[i32]> = vec![&a, &b, &c];

    let all: Vec<Vec<i32>> = candidate_instantiations(&choices).collect();
    assert_eq!(
        all,
        vec![vec![1, 3, 4], vec![1, 3, 5], vec![2, 3, 4], vec![2, 3, 5]]
    );
}

#[test]
fn test_candidate_instantiations_edge_cases() {
    let none: Vec<&[i32]> = Vec::new();
    assert_eq!(
        candidate_instantiations(&none).collect::<Vec<_>>(),
        vec![Vec::<i32>::new()]
    );

    let empty: [i32; 0] = [];
    let one = [1];
    let with_empty: Vec<&[i32]> = vec![&one, &empty];
    assert_eq!(candidate_instantiations(&with_empty).count(), 0);
}
