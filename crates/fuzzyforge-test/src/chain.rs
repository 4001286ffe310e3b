//! Chain of variables where neighbours prefer close values.
//!
//! Variable `v{i}` is constrained with `v{i+1}` only. Equal neighbours
//! satisfy the link fully, neighbours one apart satisfy it to 0.5, and any
//! other pair has no entry.

use fuzzyforge_core::{FuzzyConstraint, FuzzyProblem};

/// Builds a chain of `n_vars` variables over `0..domain_size`.
pub fn chain_problem(n_vars: usize, domain_size: u32) -> FuzzyProblem<String, u32> {
    let mut problem = FuzzyProblem::new();
    for i in 0..n_vars {
        problem.add_variable(format!("v{i}"), 0..domain_size);
    }
    for i in 1..n_vars {
        problem.add_constraint(link(n_vars, i - 1, i, domain_size));
    }
    problem
}

fn link(n_vars: usize, left: usize, right: usize, domain_size: u32) -> FuzzyConstraint<u32> {
    let mut constraint = FuzzyConstraint::new(format!("v{left}_v{right}"));
    for a in 0..domain_size {
        for b in 0..domain_size {
            let degree = match a.abs_diff(b) {
                0 => 1.0,
                1 => 0.5,
                _ => continue,
            };
            let mut slots = vec![None; n_vars];
            slots[left] = Some(a);
            slots[right] = Some(b);
            constraint.add_entry(slots, degree);
        }
    }
    constraint
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzyforge_core::Problem;

    #[test]
    fn test_chain_shape() {
        let problem = chain_problem(4, 3);
        assert!(problem.validate().is_ok());
        assert_eq!(problem.variables().len(), 4);
        assert_eq!(problem.constraints().len(), 3);
        assert_eq!(problem.num_vars_per_constraint(), 2);

        // 3 equal pairs and 4 adjacent pairs.
        assert_eq!(problem.constraints()[0].len(), 7);
        assert_eq!(problem.constraints()[2].satisfaction_degree(&[0, 0, 1, 2]), 0.5);
    }
}
