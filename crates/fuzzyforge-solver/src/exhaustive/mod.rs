//! Depth-first backtracking search.
//!
//! The search walks the [`SearchTree`] from the first variable's domain,
//! extending a partial solution one variable at a time and accepting the
//! first full path whose every prefix passes a [`PartialConsistency`] check.
//!
//! Every stacked candidate remembers its depth. Before a candidate is tried
//! the partial solution is cut back to that depth, so exhausting a subtree
//! restores the solution as it was when the subtree was entered.

mod consistency;
mod tree;

use std::fmt::{self, Debug};
use std::time::Instant;

use fuzzyforge_core::{FuzzyForgeError, Problem, Result};
use tracing::{info, trace};

use crate::solver::FuzzySolver;

pub use consistency::{AcceptAll, MinAppropriateness, PartialConsistency};
pub use tree::SearchTree;

/// Backtracking search phase over a solver.
///
/// # Type Parameters
/// * `P` - The problem type
/// * `C` - The partial-assignment consistency check
pub struct BacktrackingSearch<'s, 'p, P: Problem, C> {
    solver: &'s FuzzySolver<'p, P>,
    consistency: C,
}

impl<P: Problem, C: Debug> Debug for BacktrackingSearch<'_, '_, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BacktrackingSearch")
            .field("consistency", &self.consistency)
            .finish()
    }
}

impl<'s, 'p, P, C> BacktrackingSearch<'s, 'p, P, C>
where
    P: Problem,
    C: PartialConsistency<P>,
{
    /// Creates a backtracking search over `solver`.
    pub fn new(solver: &'s FuzzySolver<'p, P>, consistency: C) -> Self {
        Self {
            solver,
            consistency,
        }
    }

    /// Finds the first consistent full path in depth-first order.
    ///
    /// Returns `Ok(None)` when the candidates run out. A problem without
    /// variables has the empty instantiation as its only path.
    pub fn solve(&self) -> Result<Option<Vec<P::Value>>> {
        let problem = self.solver.problem();
        let n_vars = problem.variables().len();
        let start = Instant::now();
        let stats_before = self.solver.stats();

        info!(
            event = "phase_start",
            phase = "Backtracking Search",
            variable_count = n_vars as u64,
        );

        let found = if n_vars == 0 {
            Some(Vec::new())
        } else {
            self.depth_first(n_vars)?
        };

        let stats = self.solver.stats().since(&stats_before);
        info!(
            event = "phase_end",
            phase = "Backtracking Search",
            duration_ms = start.elapsed().as_millis() as u64,
            nodes = stats.nodes_explored,
            backtracks = stats.backtracks,
            found = found.is_some(),
        );
        Ok(found)
    }

    fn depth_first(&self, n_vars: usize) -> Result<Option<Vec<P::Value>>> {
        let tree = self.solver.search_tree();
        let root = self.solver.problem().domain_at(0).ok_or_else(|| {
            FuzzyForgeError::InvalidProblem("no domain for the first variable".to_string())
        })?;

        // Top of the stack is the end of the Vec; push in reverse so the
        // first domain value is tried first.
        let mut stack: Vec<(usize, &P::Value)> = root.iter().rev().map(|v| (0, v)).collect();
        let mut solution: Vec<P::Value> = Vec::with_capacity(n_vars);

        while let Some((depth, value)) = stack.pop() {
            if solution.len() > depth {
                solution.truncate(depth);
                self.solver.counters().record_backtrack();
            }

            solution.push(value.clone());
            self.solver.counters().record_node();

            if !self.consistency.is_consistent(self.solver, &solution)? {
                trace!(event = "reject", depth = depth as u64, value = ?value);
                solution.pop();
                continue;
            }

            if depth + 1 == n_vars {
                return Ok(Some(solution));
            }

            let children = tree.children(depth, value).unwrap_or(&[]);
            stack.extend(children.iter().rev().map(|child| (depth + 1, child)));
        }

        Ok(None)
    }
}
