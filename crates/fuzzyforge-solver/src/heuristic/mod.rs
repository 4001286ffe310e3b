//! Greedy heuristic search.
//!
//! The search fixes one variable per step. Each step computes the difficulty
//! and per-value appropriateness of every unfixed variable, picks the
//! variable with the lowest difficulty and assigns it its most appropriate
//! value. It is a greedy approximation: no step is ever revisited.

mod assignment;
pub mod forager;

use std::fmt::{self, Debug};
use std::time::Instant;

use fuzzyforge_config::ZeroAppropriatenessPolicy;
use fuzzyforge_core::{FuzzyForgeError, Problem, Result};
use tracing::{debug, info, trace};

use crate::solver::FuzzySolver;

pub use assignment::FixedAssignment;

/// Full instantiation found by the heuristic search and its joint degree.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicSolution<V> {
    /// One value per variable, in problem variable order.
    pub instantiation: Vec<V>,
    /// Joint degree of every problem constraint for `instantiation`.
    pub joint_degree: f64,
}

/// Heuristic search phase over a solver.
pub struct HeuristicSearch<'s, 'p, P: Problem> {
    solver: &'s FuzzySolver<'p, P>,
}

impl<P: Problem> Debug for HeuristicSearch<'_, '_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeuristicSearch").finish()
    }
}

// Variable chosen in one step, with its per-value appropriateness.
struct Selection<K, V> {
    variable: K,
    difficulty: f64,
    per_value: Vec<(V, f64)>,
}

impl<'s, 'p, P: Problem> HeuristicSearch<'s, 'p, P> {
    /// Creates a heuristic search over `solver`.
    pub fn new(solver: &'s FuzzySolver<'p, P>) -> Self {
        Self { solver }
    }

    /// Builds a full assignment.
    ///
    /// # Errors
    ///
    /// - [`FuzzyForgeError::NoViableValue`] if the selected variable has an
    ///   empty domain, or no value with nonzero appropriateness under the
    ///   `fail` policy.
    /// - [`FuzzyForgeError::Internal`] if a step selects no variable.
    /// - Any error of [`FuzzySolver::appropriateness`].
    pub fn solve(&self) -> Result<FixedAssignment<P::Var, P::Value>> {
        let variables = self.solver.problem().variables();
        let start = Instant::now();
        let stats_before = self.solver.stats();

        info!(
            event = "phase_start",
            phase = "Heuristic Search",
            variable_count = variables.len() as u64,
        );

        let mut fixed = FixedAssignment::with_capacity(variables.len());
        while fixed.len() < variables.len() {
            let selection = self.select_variable(variables, &fixed)?;
            let value = self.select_value(&selection)?;

            debug!(
                event = "step",
                step = fixed.len() as u64,
                variable = ?selection.variable,
                value = ?value,
                difficulty = selection.difficulty,
            );
            fixed.insert(selection.variable, value);
            self.solver.counters().record_heuristic_step();
        }

        let stats = self.solver.stats().since(&stats_before);
        info!(
            event = "phase_end",
            phase = "Heuristic Search",
            duration_ms = start.elapsed().as_millis() as u64,
            steps = stats.heuristic_steps,
            instantiations = stats.instantiations_evaluated,
        );
        Ok(fixed)
    }

    /// Runs [`solve`](Self::solve) and evaluates the result against every
    /// problem constraint.
    pub fn best_solution(&self) -> Result<HeuristicSolution<P::Value>> {
        let fixed = self.solve()?;
        let instantiation = fixed
            .to_instantiation(self.solver.problem().variables())
            .ok_or_else(|| {
                FuzzyForgeError::Internal(
                    "heuristic search returned a partial assignment".to_string(),
                )
            })?;
        let joint_degree = self.solver.joint_satisfaction_degree(&instantiation)?;

        Ok(HeuristicSolution {
            instantiation,
            joint_degree,
        })
    }

    fn select_variable(
        &self,
        variables: &[P::Var],
        fixed: &FixedAssignment<P::Var, P::Value>,
    ) -> Result<Selection<P::Var, P::Value>> {
        let mut candidates = Vec::new();
        for variable in variables.iter().filter(|v| !fixed.contains(v)) {
            let (difficulty, per_value) =
                self.solver.difficulty_and_appropriateness(variable, fixed)?;
            trace!(
                event = "candidate",
                variable = ?variable,
                difficulty = difficulty,
            );
            candidates.push((variable, difficulty, per_value));
        }

        let index = forager::least_difficult(candidates.iter().map(|(_, d, _)| *d))
            .ok_or_else(|| {
                FuzzyForgeError::Internal(format!(
                    "no variable selected while {} of {} remain unfixed",
                    candidates.len(),
                    variables.len()
                ))
            })?;

        let (variable, difficulty, per_value) = candidates.swap_remove(index);
        Ok(Selection {
            variable: variable.clone(),
            difficulty,
            per_value,
        })
    }

    fn select_value(&self, selection: &Selection<P::Var, P::Value>) -> Result<P::Value> {
        if let Some(index) = forager::most_appropriate(&selection.per_value) {
            return Ok(selection.per_value[index].0.clone());
        }

        match self.solver.zero_appropriateness() {
            ZeroAppropriatenessPolicy::FirstValue => {
                let (value, _) = selection.per_value.first().ok_or_else(|| {
                    FuzzyForgeError::NoViableValue(format!(
                        "variable {:?} has an empty domain",
                        selection.variable
                    ))
                })?;
                debug!(
                    event = "zero_appropriateness",
                    variable = ?selection.variable,
                    value = ?value,
                );
                Ok(value.clone())
            }
            ZeroAppropriatenessPolicy::Fail => Err(FuzzyForgeError::NoViableValue(format!(
                "variable {:?} has no value with nonzero appropriateness",
                selection.variable
            ))),
        }
    }
}
