//! Exhaustive reference computations.

use fuzzyforge_core::{JointConstraintType, Problem};
use itertools::Itertools;

/// Maximum joint degree of all constraints over every full instantiation.
///
/// Returns 0.0 when no instantiation scores above zero.
pub fn max_joint_degree<P: Problem>(problem: &P, joint_type: JointConstraintType) -> f64 {
    let n_vars = problem.variables().len();
    let joint = |instantiation: &[P::Value]| {
        joint_type.combine(
            problem
                .constraints()
                .iter()
                .map(|constraint| constraint.satisfaction_degree(instantiation)),
        )
    };

    // The product of no domains is the single empty instantiation.
    if n_vars == 0 {
        return joint(&[]).max(0.0);
    }

    (0..n_vars)
        .map(|position| problem.domain_at(position).unwrap_or(&[]).iter().cloned())
        .multi_cartesian_product()
        .map(|instantiation| joint(&instantiation))
        .fold(0.0, |best, degree| if degree > best { degree } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario;
    use fuzzyforge_core::{FuzzyConstraint, FuzzyProblem};

    #[test]
    fn test_scenario_maximum() {
        let problem = scenario::two_by_two();
        for joint_type in JointConstraintType::ALL {
            assert_eq!(max_joint_degree(&problem, joint_type), 1.0);
        }
    }

    #[test]
    fn test_empty_domain_has_no_instantiation() {
        let problem: FuzzyProblem<&str, i32> = FuzzyProblem::new()
            .with_variable("x", [1])
            .with_variable("y", [])
            .with_constraint(FuzzyConstraint::new("x").with_entry(vec![Some(1), None], 1.0));
        assert_eq!(max_joint_degree(&problem, JointConstraintType::Min), 0.0);
    }
}
