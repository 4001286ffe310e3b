//! The fuzzy constraint solving engine.
//!
//! [`FuzzySolver`] borrows a problem read-only and owns the derived state:
//! the evaluator configuration, the memoized search tree and the statistics
//! counters.

use std::cell::OnceCell;
use std::fmt;

use fuzzyforge_config::{BacktrackingConfig, ConsistencyType, SolverConfig, ZeroAppropriatenessPolicy};
use fuzzyforge_core::{FuzzyConstraint, FuzzyForgeError, JointConstraintType, Problem, Result};
use tracing::debug;

use crate::evaluator::ConstraintEvaluator;
use crate::exhaustive::{
    AcceptAll, BacktrackingSearch, MinAppropriateness, PartialConsistency, SearchTree,
};
use crate::heuristic::{FixedAssignment, HeuristicSearch, HeuristicSolution};
use crate::stats::{Counters, SolverStats};

/// Solver for a borrowed fuzzy constraint satisfaction problem.
///
/// The search tree is computed on first request and never invalidated; build
/// a new solver if the problem changes. The solver is single-threaded: it is
/// neither `Sync` nor meant to be shared across threads.
///
/// # Example
///
/// ```
/// use fuzzyforge_core::{FuzzyConstraint, FuzzyProblem};
/// use fuzzyforge_solver::FuzzySolver;
///
/// let problem = FuzzyProblem::new()
///     .with_variable("x", [1, 2])
///     .with_variable("y", [1, 2])
///     .with_constraint(
///         FuzzyConstraint::new("equal")
///             .with_entry(vec![Some(1), Some(1)], 1.0)
///             .with_entry(vec![Some(2), Some(2)], 0.5),
///     );
///
/// let solver = FuzzySolver::new(&problem);
/// let solution = solver.best_heuristic_solution().unwrap();
/// assert_eq!(solution.instantiation, vec![1, 1]);
/// assert_eq!(solution.joint_degree, 1.0);
///
/// let path = solver.backtracking_search().unwrap();
/// assert_eq!(path.map(|p| p.len()), Some(2));
/// ```
pub struct FuzzySolver<'p, P: Problem> {
    problem: &'p P,
    evaluator: ConstraintEvaluator,
    max_enumeration: Option<u64>,
    zero_appropriateness: ZeroAppropriatenessPolicy,
    backtracking: BacktrackingConfig,
    search_tree: OnceCell<SearchTree<P::Value>>,
    counters: Counters,
}

impl<P: Problem> fmt::Debug for FuzzySolver<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzySolver")
            .field("variables", &self.problem.variables())
            .field("joint_type", &self.evaluator.joint_type())
            .field("max_enumeration", &self.max_enumeration)
            .field("zero_appropriateness", &self.zero_appropriateness)
            .field("backtracking", &self.backtracking)
            .field("search_tree_built", &self.search_tree.get().is_some())
            .finish()
    }
}

impl<'p, P: Problem> FuzzySolver<'p, P> {
    /// Creates a solver with the default configuration.
    pub fn new(problem: &'p P) -> Self {
        Self::from_valid_config(problem, &SolverConfig::default())
    }

    /// Creates a solver from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyForgeError::Config`] if `config` fails
    /// [`SolverConfig::validate`].
    pub fn with_config(problem: &'p P, config: &SolverConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| FuzzyForgeError::Config(e.to_string()))?;
        Ok(Self::from_valid_config(problem, config))
    }

    fn from_valid_config(problem: &'p P, config: &SolverConfig) -> Self {
        Self {
            problem,
            evaluator: ConstraintEvaluator::new(config.joint_constraint_type),
            max_enumeration: config.max_enumeration,
            zero_appropriateness: config.heuristic.zero_appropriateness,
            backtracking: config.backtracking,
            search_tree: OnceCell::new(),
            counters: Counters::default(),
        }
    }

    /// Returns the problem being solved.
    #[inline]
    pub fn problem(&self) -> &'p P {
        self.problem
    }

    /// Returns the evaluator.
    #[inline]
    pub fn evaluator(&self) -> &ConstraintEvaluator {
        &self.evaluator
    }

    /// Returns the joint constraint type.
    pub fn joint_constraint_type(&self) -> JointConstraintType {
        self.evaluator.joint_type()
    }

    /// Sets the joint constraint type.
    pub fn set_joint_constraint_type(&mut self, joint_type: JointConstraintType) {
        self.evaluator.set_joint_type(joint_type);
    }

    /// Sets the joint constraint type by its configuration name.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyForgeError::Config`] for an unknown name.
    pub fn set_joint_constraint_type_name(&mut self, name: &str) -> Result<()> {
        let joint_type: JointConstraintType = name.parse()?;
        self.set_joint_constraint_type(joint_type);
        Ok(())
    }

    /// Returns the enumeration bound for appropriateness queries.
    pub fn max_enumeration(&self) -> Option<u64> {
        self.max_enumeration
    }

    /// Returns the zero-appropriateness policy of the heuristic search.
    pub fn zero_appropriateness(&self) -> ZeroAppropriatenessPolicy {
        self.zero_appropriateness
    }

    /// Returns a snapshot of the statistics counters.
    pub fn stats(&self) -> SolverStats {
        self.counters.snapshot()
    }

    pub(crate) fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Satisfaction degree of one constraint for a (possibly partial)
    /// instantiation.
    pub fn constraint_satisfaction_degree(
        &self,
        constraint: &FuzzyConstraint<P::Value>,
        instantiation: &[P::Value],
    ) -> f64 {
        self.evaluator.evaluate(constraint, instantiation)
    }

    /// Joint satisfaction degree of `constraints` for a (possibly partial)
    /// instantiation, using the configured joint constraint type.
    pub fn joint_constraint_satisfaction_degree<'c, I>(
        &self,
        constraints: I,
        instantiation: &[P::Value],
    ) -> f64
    where
        I: IntoIterator<Item = &'c FuzzyConstraint<P::Value>>,
        P::Value: 'c,
    {
        self.evaluator.evaluate_joint(constraints, instantiation)
    }

    /// Joint satisfaction degree of every problem constraint for a full
    /// instantiation.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyForgeError::InvalidArgument`] if the instantiation does
    /// not have one value per variable.
    pub fn joint_satisfaction_degree(&self, instantiation: &[P::Value]) -> Result<f64> {
        let n_vars = self.problem.variables().len();
        if instantiation.len() != n_vars {
            return Err(FuzzyForgeError::InvalidArgument(format!(
                "instantiation has {} values, problem has {} variables",
                instantiation.len(),
                n_vars
            )));
        }
        Ok(self
            .evaluator
            .evaluate_joint(self.problem.constraints(), instantiation))
    }

    /// Returns the search tree, building it on first use.
    pub fn search_tree(&self) -> &SearchTree<P::Value> {
        self.search_tree.get_or_init(|| {
            let tree = SearchTree::build(self.problem);
            debug!(
                event = "search_tree_built",
                depth = tree.depth() as u64,
                nodes = tree.len() as u64,
            );
            tree
        })
    }

    /// Greedily builds a full assignment, one variable per step.
    ///
    /// See [`HeuristicSearch`].
    pub fn heuristic_search(&self) -> Result<FixedAssignment<P::Var, P::Value>> {
        HeuristicSearch::new(self).solve()
    }

    /// Runs the heuristic search and reports the joint degree of its result.
    pub fn best_heuristic_solution(&self) -> Result<HeuristicSolution<P::Value>> {
        HeuristicSearch::new(self).best_solution()
    }

    /// Depth-first backtracking search using the configured consistency
    /// check.
    ///
    /// Returns `Ok(None)` when every path is rejected.
    pub fn backtracking_search(&self) -> Result<Option<Vec<P::Value>>> {
        match self.backtracking.consistency {
            ConsistencyType::AcceptAll => self.backtracking_search_with(AcceptAll),
            ConsistencyType::MinAppropriateness => self.backtracking_search_with(
                MinAppropriateness::new(self.backtracking.threshold),
            ),
        }
    }

    /// Depth-first backtracking search with an explicit consistency check.
    pub fn backtracking_search_with<C>(&self, consistency: C) -> Result<Option<Vec<P::Value>>>
    where
        C: PartialConsistency<P>,
    {
        BacktrackingSearch::new(self, consistency).solve()
    }

    /// Checks a partial assignment of the first `partial.len()` variables
    /// with the configured consistency check.
    pub fn is_partial_assignment_consistent(&self, partial: &[P::Value]) -> Result<bool> {
        match self.backtracking.consistency {
            ConsistencyType::AcceptAll => AcceptAll.is_consistent(self, partial),
            ConsistencyType::MinAppropriateness => {
                MinAppropriateness::new(self.backtracking.threshold).is_consistent(self, partial)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzyforge_test::scenario;

    #[test]
    fn test_default_config() {
        let problem = scenario::two_by_two();
        let solver = FuzzySolver::new(&problem);

        assert_eq!(solver.joint_constraint_type(), JointConstraintType::Productive);
        assert_eq!(solver.max_enumeration(), None);
        assert_eq!(
            solver.zero_appropriateness(),
            ZeroAppropriatenessPolicy::FirstValue
        );
        assert_eq!(solver.stats(), SolverStats::default());
    }

    #[test]
    fn test_with_config() {
        let problem = scenario::two_by_two();
        let config = SolverConfig::new()
            .with_joint_constraint_type(JointConstraintType::Average)
            .with_max_enumeration(10);
        let solver = FuzzySolver::with_config(&problem, &config).unwrap();

        assert_eq!(solver.joint_constraint_type(), JointConstraintType::Average);
        assert_eq!(solver.max_enumeration(), Some(10));
    }

    #[test]
    fn test_with_config_rejects_invalid_values() {
        let problem = scenario::two_by_two();

        let zero_limit = SolverConfig::new().with_max_enumeration(0);
        assert!(matches!(
            FuzzySolver::with_config(&problem, &zero_limit),
            Err(FuzzyForgeError::Config(_))
        ));

        for threshold in [-0.1, 1.5, f64::NAN] {
            let config = SolverConfig::new().with_backtracking(BacktrackingConfig {
                consistency: ConsistencyType::MinAppropriateness,
                threshold,
            });
            assert!(
                matches!(
                    FuzzySolver::with_config(&problem, &config),
                    Err(FuzzyForgeError::Config(_))
                ),
                "threshold {threshold}"
            );
        }
    }

    #[test]
    fn test_set_joint_constraint_type_name() {
        let problem = scenario::two_by_two();
        let mut solver = FuzzySolver::new(&problem);

        solver.set_joint_constraint_type_name("min").unwrap();
        assert_eq!(solver.joint_constraint_type(), JointConstraintType::Min);

        let err = solver.set_joint_constraint_type_name("sum").unwrap_err();
        assert!(matches!(err, FuzzyForgeError::Config(_)));
        assert_eq!(solver.joint_constraint_type(), JointConstraintType::Min);
    }

    #[test]
    fn test_joint_satisfaction_degree() {
        let problem = scenario::two_by_two();
        let solver = FuzzySolver::new(&problem);

        assert_eq!(solver.joint_satisfaction_degree(&[1, 1]).unwrap(), 1.0);
        assert_eq!(solver.joint_satisfaction_degree(&[2, 2]).unwrap(), 0.5);
        assert_eq!(solver.joint_satisfaction_degree(&[2, 1]).unwrap(), 0.0);
    }

    #[test]
    fn test_joint_satisfaction_degree_rejects_wrong_length() {
        let problem = scenario::two_by_two();
        let solver = FuzzySolver::new(&problem);

        assert!(matches!(
            solver.joint_satisfaction_degree(&[1]),
            Err(FuzzyForgeError::InvalidArgument(_))
        ));
        assert!(matches!(
            solver.joint_satisfaction_degree(&[1, 1, 1]),
            Err(FuzzyForgeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_partial_joint_degree_uses_prefix() {
        let problem = scenario::two_by_two();
        let solver = FuzzySolver::new(&problem);

        let degree = solver.joint_constraint_satisfaction_degree(problem_constraints(&problem), &[2]);
        assert_eq!(degree, 0.5);
    }

    #[test]
    fn test_search_tree_is_memoized() {
        let problem = scenario::two_by_two();
        let solver = FuzzySolver::new(&problem);

        let first = solver.search_tree() as *const _;
        let second = solver.search_tree() as *const _;
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_consistency_accepts_everything() {
        let problem = scenario::two_by_two();
        let solver = FuzzySolver::new(&problem);

        assert!(solver.is_partial_assignment_consistent(&[2]).unwrap());
        assert!(solver.is_partial_assignment_consistent(&[2, 1]).unwrap());
    }

    fn problem_constraints<Pr: Problem>(problem: &Pr) -> &[FuzzyConstraint<Pr::Value>] {
        problem.constraints()
    }
}
