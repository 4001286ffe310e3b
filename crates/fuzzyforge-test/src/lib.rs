//! Shared test fixtures for FuzzyForge crates.
//!
//! This crate provides problem builders and pure reference functions for
//! testing. It does NOT depend on `fuzzyforge-solver` so the solver can use
//! it as a dev-dependency.
//!
//! - [`scenario`] - The two-variable equality problem
//! - [`chain`] - Variables linked by closeness constraints
//! - [`coloring`] - Graph coloring with all-different edges
//! - [`random`] - Seeded random problems and degrees
//! - [`brute_force`] - Exhaustive reference computations
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! fuzzyforge-test = { workspace = true }
//! ```

pub mod brute_force;
pub mod chain;
pub mod coloring;
pub mod random;
pub mod scenario;
