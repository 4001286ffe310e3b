//! Appropriateness lookahead.
//!
//! The appropriateness of a tentative assignment is the best joint
//! satisfaction degree reachable by fixing some variables and letting every
//! other variable range over its full domain. It is an optimistic estimate:
//! every completion is enumerated, so the cost grows exponentially with the
//! number of free variables. [`SolverConfig::max_enumeration`] bounds it.
//!
//! [`SolverConfig::max_enumeration`]: fuzzyforge_config::SolverConfig::max_enumeration

use fuzzyforge_core::{FuzzyConstraint, FuzzyForgeError, Problem, Result};
use itertools::Itertools;
use tracing::trace;

use crate::heuristic::FixedAssignment;
use crate::solver::FuzzySolver;

impl<P: Problem> FuzzySolver<'_, P> {
    /// Best joint degree over all instantiations with `variables` fixed to
    /// `values`.
    ///
    /// Only constraints mentioning every fixed variable take part, unless
    /// more variables are fixed than a constraint can refer to, in which case
    /// all constraints do. Returns 0.0 when there is no candidate.
    ///
    /// # Errors
    ///
    /// - [`FuzzyForgeError::InvalidArgument`] if the slices differ in length
    ///   or a variable is unknown.
    /// - [`FuzzyForgeError::EnumerationLimit`] if the candidate count exceeds
    ///   the configured bound.
    pub fn appropriateness(&self, variables: &[P::Var], values: &[P::Value]) -> Result<f64> {
        if variables.len() != values.len() {
            return Err(FuzzyForgeError::InvalidArgument(format!(
                "{} variables fixed to {} values",
                variables.len(),
                values.len()
            )));
        }

        let choices = self.candidate_choices(variables, values)?;
        let positions = self.fixed_positions(variables)?;
        let relevant = self.relevant_constraints(variables.len(), &positions);

        let best = self.best_joint_degree(&choices, &relevant);
        trace!(
            event = "appropriateness",
            fixed = ?values,
            constraints = relevant.len() as u64,
            appropriateness = best,
        );
        Ok(best)
    }

    /// Best joint degree of every problem constraint over all completions of
    /// a partial assignment of the first `partial.len()` variables.
    ///
    /// Unlike [`appropriateness`](Self::appropriateness) no constraint is
    /// filtered out, so a result of 0.0 means no full instantiation
    /// extending `partial` satisfies the problem at all.
    ///
    /// # Errors
    ///
    /// - [`FuzzyForgeError::InvalidArgument`] if `partial` is longer than
    ///   the variable list.
    /// - [`FuzzyForgeError::EnumerationLimit`] if the completion count
    ///   exceeds the configured bound.
    pub fn best_completion(&self, partial: &[P::Value]) -> Result<f64> {
        let all = self.problem().variables();
        let variables = all.get(..partial.len()).ok_or_else(|| {
            FuzzyForgeError::InvalidArgument(format!(
                "partial assignment has {} values, problem has {} variables",
                partial.len(),
                all.len()
            ))
        })?;

        let choices = self.candidate_choices(variables, partial)?;
        let constraints: Vec<_> = self.problem().constraints().iter().collect();
        let best = self.best_joint_degree(&choices, &constraints);
        trace!(event = "best_completion", fixed = ?partial, degree = best);
        Ok(best)
    }

    /// Appropriateness of each value of `variable` on top of `fixed`, and
    /// their sum as the difficulty of `variable`.
    ///
    /// A difficulty near zero means no value of `variable` leads anywhere
    /// good under the current fixes. Per-value results keep domain order.
    pub fn difficulty_and_appropriateness(
        &self,
        variable: &P::Var,
        fixed: &FixedAssignment<P::Var, P::Value>,
    ) -> Result<(f64, Vec<(P::Value, f64)>)> {
        let domain = self.problem().domain(variable).ok_or_else(|| {
            FuzzyForgeError::InvalidArgument(format!("unknown variable {:?}", variable))
        })?;

        let mut variables = fixed.variables().to_vec();
        variables.push(variable.clone());
        let mut values = fixed.values().to_vec();

        let mut difficulty = 0.0;
        let mut per_value = Vec::with_capacity(domain.len());
        for value in domain {
            values.push(value.clone());
            let appropriateness = self.appropriateness(&variables, &values)?;
            values.pop();

            difficulty += appropriateness;
            per_value.push((value.clone(), appropriateness));
        }

        Ok((difficulty, per_value))
    }

    // Per position, the values an instantiation may take: the fixed value or
    // the whole domain. A variable fixed twice keeps its last value.
    fn candidate_choices<'a>(
        &'a self,
        variables: &[P::Var],
        values: &'a [P::Value],
    ) -> Result<Vec<&'a [P::Value]>> {
        let problem = self.problem();
        let mut choices = (0..problem.variables().len())
            .map(|index| {
                problem.domain_at(index).ok_or_else(|| {
                    FuzzyForgeError::InvalidProblem(format!("no domain for variable {}", index))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for (variable, value) in variables.iter().zip(values) {
            let index = self.index_of(variable)?;
            choices[index] = std::slice::from_ref(value);
        }

        if let Some(limit) = self.max_enumeration() {
            let candidates = choices
                .iter()
                .fold(1u128, |acc, choice| acc.saturating_mul(choice.len() as u128));
            if candidates > u128::from(limit) {
                return Err(FuzzyForgeError::EnumerationLimit { candidates, limit });
            }
        }

        Ok(choices)
    }

    // Maximum joint degree over the product of `choices`; 0.0 when empty.
    fn best_joint_degree(
        &self,
        choices: &[&[P::Value]],
        constraints: &[&FuzzyConstraint<P::Value>],
    ) -> f64 {
        let mut best = 0.0;
        let mut evaluated = 0u64;
        for instantiation in candidate_instantiations(choices) {
            evaluated += 1;
            let joint = self
                .evaluator()
                .evaluate_joint(constraints.iter().copied(), &instantiation);
            if joint > best {
                best = joint;
            }
        }
        self.counters().record_appropriateness_query(evaluated);
        best
    }

    fn fixed_positions(&self, variables: &[P::Var]) -> Result<Vec<usize>> {
        variables.iter().map(|variable| self.index_of(variable)).collect()
    }

    fn relevant_constraints(
        &self,
        n_fixed: usize,
        positions: &[usize],
    ) -> Vec<&FuzzyConstraint<P::Value>> {
        let constraints = self.problem().constraints();
        if n_fixed > self.problem().num_vars_per_constraint() {
            constraints.iter().collect()
        } else {
            constraints
                .iter()
                .filter(|constraint| constraint.mentions_all(positions))
                .collect()
        }
    }

    fn index_of(&self, variable: &P::Var) -> Result<usize> {
        self.problem().variable_index(variable).ok_or_else(|| {
            FuzzyForgeError::InvalidArgument(format!("unknown variable {:?}", variable))
        })
    }
}

/// Cartesian product of `choices`, in lexicographic order of positions.
///
/// No positions yield the single empty instantiation; any empty choice
/// yields nothing.
pub fn candidate_instantiations<'a, V: Clone>(
    choices: &'a [&'a [V]],
) -> Box<dyn Iterator<Item = Vec<V>> + 'a> {
    if choices.is_empty() {
        return Box::new(std::iter::once(Vec::new()));
    }
    Box::new(
        choices
            .iter()
            .map(|choice| choice.iter().cloned())
            .multi_cartesian_product(),
    )
}

#[cfg(test)]
#[path = "appropriateness_tests.rs"]
mod tests;
