//! FuzzyForge Solver Engine
//!
//! This crate provides the solving engine for fuzzy constraint satisfaction
//! problems:
//! - Constraint evaluation (individual and joint satisfaction degrees)
//! - Appropriateness lookahead over all completions of a partial assignment
//! - Greedy heuristic search driven by difficulty and appropriateness
//! - Search tree construction and depth-first backtracking search
//! - Statistics for monitoring

pub mod appropriateness;
pub mod evaluator;
pub mod exhaustive;
pub mod heuristic;
pub mod solver;
pub mod stats;

pub use evaluator::ConstraintEvaluator;
pub use exhaustive::{
    AcceptAll, BacktrackingSearch, MinAppropriateness, PartialConsistency, SearchTree,
};
pub use heuristic::{FixedAssignment, HeuristicSearch, HeuristicSolution};
pub use solver::FuzzySolver;
pub use stats::SolverStats;
