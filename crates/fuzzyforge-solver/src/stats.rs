//! Solver statistics.
//!
//! Counters are accumulated over the lifetime of a [`FuzzySolver`] and read
//! back as a [`SolverStats`] snapshot.
//!
//! [`FuzzySolver`]: crate::FuzzySolver

use std::cell::Cell;

/// Snapshot of the solver counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Appropriateness queries answered.
    pub appropriateness_queries: u64,
    /// Candidate instantiations joint-evaluated by appropriateness queries.
    pub instantiations_evaluated: u64,
    /// Variables fixed by the heuristic search.
    pub heuristic_steps: u64,
    /// Candidate values tried by the backtracking search.
    pub nodes_explored: u64,
    /// Times the backtracking search undid a partial solution.
    pub backtracks: u64,
}

impl SolverStats {
    /// Counter increments between `earlier` and `self`.
    pub fn since(&self, earlier: &SolverStats) -> SolverStats {
        SolverStats {
            appropriateness_queries: self
                .appropriateness_queries
                .saturating_sub(earlier.appropriateness_queries),
            instantiations_evaluated: self
                .instantiations_evaluated
                .saturating_sub(earlier.instantiations_evaluated),
            heuristic_steps: self.heuristic_steps.saturating_sub(earlier.heuristic_steps),
            nodes_explored: self.nodes_explored.saturating_sub(earlier.nodes_explored),
            backtracks: self.backtracks.saturating_sub(earlier.backtracks),
        }
    }
}

// Interior counters; the solver is single-threaded.
#[derive(Debug, Default)]
pub(crate) struct Counters {
    appropriateness_queries: Cell<u64>,
    instantiations_evaluated: Cell<u64>,
    heuristic_steps: Cell<u64>,
    nodes_explored: Cell<u64>,
    backtracks: Cell<u64>,
}

impl Counters {
    pub(crate) fn record_appropriateness_query(&self, instantiations: u64) {
        bump(&self.appropriateness_queries, 1);
        bump(&self.instantiations_evaluated, instantiations);
    }

    pub(crate) fn record_heuristic_step(&self) {
        bump(&self.heuristic_steps, 1);
    }

    pub(crate) fn record_node(&self) {
        bump(&self.nodes_explored, 1);
    }

    pub(crate) fn record_backtrack(&self) {
        bump(&self.backtracks, 1);
    }

    pub(crate) fn snapshot(&self) -> SolverStats {
        SolverStats {
            appropriateness_queries: self.appropriateness_queries.get(),
            instantiations_evaluated: self.instantiations_evaluated.get(),
            heuristic_steps: self.heuristic_steps.get(),
            nodes_explored: self.nodes_explored.get(),
            backtracks: self.backtracks.get(),
        }
    }
}

fn bump(counter: &Cell<u64>, by: u64) {
    counter.set(counter.get().saturating_add(by));
}
