//! Partial-assignment consistency checks.
//!
//! A partial assignment holds values for the first `len` variables in
//! problem order.

use fuzzyforge_core::{Problem, Result};

use crate::solver::FuzzySolver;

/// Decides whether the backtracking search may extend a partial assignment.
pub trait PartialConsistency<P: Problem> {
    /// Returns whether `partial` may be extended.
    fn is_consistent(&self, solver: &FuzzySolver<'_, P>, partial: &[P::Value]) -> Result<bool>;
}

/// Accepts every partial assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl<P: Problem> PartialConsistency<P> for AcceptAll {
    fn is_consistent(&self, _solver: &FuzzySolver<'_, P>, _partial: &[P::Value]) -> Result<bool> {
        Ok(true)
    }
}

/// Accepts a partial assignment that some completion satisfies above a
/// threshold.
///
/// A prefix is judged by its best completion over every constraint, the
/// free variables ranging over their whole domains. The check never prunes
/// a prefix of a full instantiation whose joint degree exceeds the
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinAppropriateness {
    threshold: f64,
}

impl MinAppropriateness {
    /// Creates a check with the given threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Returns the threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl<P: Problem> PartialConsistency<P> for MinAppropriateness {
    fn is_consistent(&self, solver: &FuzzySolver<'_, P>, partial: &[P::Value]) -> Result<bool> {
        Ok(solver.best_completion(partial)? > self.threshold)
    }
}
