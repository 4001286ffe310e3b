//! Two variables, one equality constraint.

use fuzzyforge_core::{FuzzyConstraint, FuzzyProblem};

/// `x` and `y` over `{1, 2}`, with `(1, 1)` fully and `(2, 2)` half
/// satisfying the single constraint.
pub fn two_by_two() -> FuzzyProblem<&'static str, i32> {
    FuzzyProblem::new()
        .with_variable("x", [1, 2])
        .with_variable("y", [1, 2])
        .with_constraint(
            FuzzyConstraint::new("equal")
                .with_entry(vec![Some(1), Some(1)], 1.0)
                .with_entry(vec![Some(2), Some(2)], 0.5),
        )
}
