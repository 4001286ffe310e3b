//! Seeded random fixtures.
//!
//! The same seed always yields the same problem.

use fuzzyforge_core::{FuzzyConstraint, FuzzyProblem};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Probability that a value pair gets an entry in a random constraint.
const ENTRY_PROBABILITY: f64 = 0.7;

/// Builds a random binary problem.
///
/// Variables are `0..n_vars`, each over `0..domain_size`. Every constraint
/// links two distinct random variables and gives a random degree in `[0, 1)`
/// to most of their value pairs. Needs at least two variables when
/// `n_constraints > 0`.
pub fn random_problem(
    seed: u64,
    n_vars: usize,
    domain_size: u32,
    n_constraints: usize,
) -> FuzzyProblem<usize, u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut problem = FuzzyProblem::new();
    for var in 0..n_vars {
        problem.add_variable(var, 0..domain_size);
    }

    for c in 0..n_constraints {
        let left = rng.random_range(0..n_vars);
        let right = (left + rng.random_range(1..n_vars)) % n_vars;

        let mut constraint = FuzzyConstraint::new(format!("random_{c}"));
        for a in 0..domain_size {
            for b in 0..domain_size {
                if !rng.random_bool(ENTRY_PROBABILITY) {
                    continue;
                }
                let mut slots = vec![None; n_vars];
                slots[left] = Some(a);
                slots[right] = Some(b);
                constraint.add_entry(slots, rng.random::<f64>());
            }
        }
        problem.add_constraint(constraint);
    }
    problem
}

/// Returns `len` random degrees in `[0, 1)`.
pub fn random_degrees(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<f64>()).collect()
}
