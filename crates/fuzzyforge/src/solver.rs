//! Solver entry point that hides all internal wiring.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use fuzzyforge_config::SolverConfig;
use fuzzyforge_core::{FuzzyProblem, Problem, Result};
use fuzzyforge_solver::{FuzzySolver, HeuristicSolution, SolverStats};
use tracing::info;

/// Configuration file read by [`solve`].
pub const CONFIG_FILE: &str = "fuzzyforge.toml";

/// Results of one solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome<V> {
    /// Greedy heuristic assignment and its joint degree.
    pub heuristic: HeuristicSolution<V>,
    /// First consistent path of the backtracking search, if any.
    pub backtracking: Option<Vec<V>>,
    /// Counters accumulated over both searches.
    pub stats: SolverStats,
}

/// Validates `problem`, then runs the heuristic and backtracking searches.
///
/// # Errors
///
/// Returns [`FuzzyForgeError::InvalidProblem`] for a malformed problem,
/// [`FuzzyForgeError::Config`] for an invalid configuration, and propagates
/// any search error.
///
/// [`FuzzyForgeError::InvalidProblem`]: fuzzyforge_core::FuzzyForgeError::InvalidProblem
/// [`FuzzyForgeError::Config`]: fuzzyforge_core::FuzzyForgeError::Config
pub fn run_solver<K, V>(
    problem: &FuzzyProblem<K, V>,
    config: &SolverConfig,
) -> Result<SolverOutcome<V>>
where
    K: Clone + Eq + Hash + Debug,
    V: Clone + Eq + Hash + Debug,
{
    #[cfg(feature = "console")]
    fuzzyforge_console::init();

    problem.validate()?;
    let solver = FuzzySolver::with_config(problem, config)?;

    let start = Instant::now();
    info!(
        event = "solve_start",
        variable_count = problem.variables().len() as u64,
        constraint_count = problem.constraints().len() as u64,
        joint_type = config.joint_constraint_type.as_str(),
        search_space_log10 = search_space_log10(problem.domains()),
    );

    let heuristic = solver.best_heuristic_solution()?;
    let backtracking = solver.backtracking_search()?;
    let stats = solver.stats();

    info!(
        event = "solve_end",
        duration_ms = start.elapsed().as_millis() as u64,
        joint_degree = heuristic.joint_degree,
        found = backtracking.is_some(),
    );

    Ok(SolverOutcome {
        heuristic,
        backtracking,
        stats,
    })
}

/// Runs [`run_solver`] with the configuration in [`CONFIG_FILE`], falling
/// back to the defaults when it is missing or unreadable.
pub fn solve<K, V>(problem: &FuzzyProblem<K, V>) -> Result<SolverOutcome<V>>
where
    K: Clone + Eq + Hash + Debug,
    V: Clone + Eq + Hash + Debug,
{
    let config = SolverConfig::load(CONFIG_FILE).unwrap_or_default();
    run_solver(problem, &config)
}

// Sum of log10 domain sizes; negative infinity when any domain is empty.
fn search_space_log10<V>(domains: &[Vec<V>]) -> f64 {
    domains.iter().map(|domain| (domain.len() as f64).log10()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_space_log10() {
        assert_eq!(search_space_log10::<u8>(&[]), 0.0);
        assert_eq!(search_space_log10(&[vec![1; 10], vec![1; 100]]), 3.0);
        assert_eq!(
            search_space_log10(&[vec![1], Vec::new()]),
            f64::NEG_INFINITY
        );
    }
}
