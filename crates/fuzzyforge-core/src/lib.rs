//! FuzzyForge Core - Core types and traits for fuzzy constraint solving
//!
//! This crate provides the fundamental abstractions for FuzzyForge:
//! - Fuzzy constraints mapping assignment tuples to satisfaction degrees
//! - Joint constraint types combining individual degrees into one
//! - The `Problem` trait queried by the solver, and a concrete `FuzzyProblem`
//! - The shared error type

pub mod constraint;
pub mod error;
pub mod joint;
pub mod problem;


pub use constraint::{FuzzyAssignment, FuzzyConstraint};
pub use error::{FuzzyForgeError, Result};
pub use joint::JointConstraintType;
pub use problem::{FuzzyProblem, Problem};
