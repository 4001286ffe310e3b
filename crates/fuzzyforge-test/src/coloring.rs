//! Graph coloring fixtures.

use fuzzyforge_core::{FuzzyConstraint, FuzzyProblem};

const COLORS: [&str; 3] = ["red", "green", "blue"];

/// Three mutually adjacent nodes `a`, `b`, `c` and three colors.
///
/// Each edge is fully satisfied by any pair of distinct colors.
pub fn triangle() -> FuzzyProblem<&'static str, &'static str> {
    let nodes = ["a", "b", "c"];
    let edges = [(0, 1), (0, 2), (1, 2)];

    let mut problem = FuzzyProblem::new();
    for node in nodes {
        problem.add_variable(node, COLORS);
    }
    for (left, right) in edges {
        let mut constraint = FuzzyConstraint::new(format!("{}_{}", nodes[left], nodes[right]));
        for a in COLORS {
            for b in COLORS.into_iter().filter(|&b| b != a) {
                let mut slots = vec![None; nodes.len()];
                slots[left] = Some(a);
                slots[right] = Some(b);
                constraint.add_entry(slots, 1.0);
            }
        }
        problem.add_constraint(constraint);
    }
    problem
}
