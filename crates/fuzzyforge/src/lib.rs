//! FuzzyForge - A Fuzzy Constraint Satisfaction Solver in Rust
//!
//! Describe variables, domains and graded constraints, then call
//! [`run_solver`].
//!
//! # Example
//!
//! ```rust
//! use fuzzyforge::prelude::*;
//!
//! let problem = FuzzyProblem::new()
//!     .with_variable("x", [1, 2])
//!     .with_variable("y", [1, 2])
//!     .with_constraint(
//!         FuzzyConstraint::new("equal")
//!             .with_entry(vec![Some(1), Some(1)], 1.0)
//!             .with_entry(vec![Some(2), Some(2)], 0.5),
//!     );
//!
//! let outcome = run_solver(&problem, &SolverConfig::default()).unwrap();
//! assert_eq!(outcome.heuristic.instantiation, vec![1, 1]);
//! assert_eq!(outcome.heuristic.joint_degree, 1.0);
//! assert_eq!(outcome.backtracking, Some(vec![1, 1]));
//! ```

pub use fuzzyforge_config::{
    BacktrackingConfig, ConfigError, ConsistencyType, HeuristicConfig, SolverConfig,
    ZeroAppropriatenessPolicy,
};
pub use fuzzyforge_core::{
    FuzzyAssignment, FuzzyConstraint, FuzzyForgeError, FuzzyProblem, JointConstraintType,
    Problem, Result,
};
pub use fuzzyforge_solver::{
    AcceptAll, ConstraintEvaluator, FixedAssignment, FuzzySolver, HeuristicSolution,
    MinAppropriateness, PartialConsistency, SearchTree, SolverStats,
};

#[cfg(feature = "console")]
pub use fuzzyforge_console as console;

mod solver;
pub use solver::{run_solver, solve, SolverOutcome, CONFIG_FILE};

pub mod prelude {
    pub use super::{run_solver, solve, SolverOutcome};
    pub use super::{FuzzyConstraint, FuzzyProblem, JointConstraintType, Problem};
    pub use super::{FuzzySolver, SolverConfig};
}
