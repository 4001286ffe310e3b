//! Problem definitions.
//!
//! The solver only reads a problem through the [`Problem`] trait. Variable
//! order is stable and defines the position of each variable in an
//! instantiation tuple.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::constraint::FuzzyConstraint;
use crate::error::{FuzzyForgeError, Result};

/// Read-only view of a fuzzy constraint satisfaction problem.
pub trait Problem {
    /// Variable identifier type.
    type Var: Clone + Eq + Hash + Debug;

    /// Domain value type.
    type Value: Clone + Eq + Hash + Debug;

    /// Variables in instantiation order.
    fn variables(&self) -> &[Self::Var];

    /// Ordered domain of `variable`, or `None` for an unknown variable.
    fn domain(&self, variable: &Self::Var) -> Option<&[Self::Value]>;

    /// All fuzzy constraints of the problem.
    fn constraints(&self) -> &[FuzzyConstraint<Self::Value>];

    /// Upper bound on the number of variables a single constraint refers to.
    fn num_vars_per_constraint(&self) -> usize;

    /// Position of `variable` in instantiation order.
    fn variable_index(&self, variable: &Self::Var) -> Option<usize> {
        self.variables().iter().position(|v| v == variable)
    }

    /// Domain of the variable at `index`.
    fn domain_at(&self, index: usize) -> Option<&[Self::Value]> {
        self.variables()
            .get(index)
            .and_then(|variable| self.domain(variable))
    }
}

/// A problem stored as plain vectors.
///
/// # Type Parameters
/// * `K` - Variable identifier type
/// * `V` - Domain value type
///
/// # Example
///
/// ```
/// use fuzzyforge_core::{FuzzyConstraint, FuzzyProblem, Problem};
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
/// assert_eq!(problem.variables(), &["x", "y"]);
/// assert_eq!(problem.domain(&"y"), Some(&[1, 2][..]));
/// assert_eq!(problem.num_vars_per_constraint(), 2);
/// assert!(problem.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct FuzzyProblem<K, V> {
    variables: Vec<K>,
    domains: Vec<Vec<V>>,
    constraints: Vec<FuzzyConstraint<V>>,
    num_vars_per_constraint: Option<usize>,
}

impl<K, V> Default for FuzzyProblem<K, V> {
    fn default() -> Self {
        Self {
            variables: Vec::new(),
            domains: Vec::new(),
            constraints: Vec::new(),
            num_vars_per_constraint: None,
        }
    }
}

impl<K, V> FuzzyProblem<K, V> {
    /// Creates an empty problem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a variable with its ordered domain.
    pub fn with_variable(mut self, variable: K, domain: impl IntoIterator<Item = V>) -> Self {
        self.add_variable(variable, domain);
        self
    }

    /// Appends a constraint.
    pub fn with_constraint(mut self, constraint: FuzzyConstraint<V>) -> Self {
        self.add_constraint(constraint);
        self
    }

    /// Overrides the arity bound derived from the constraints.
    pub fn with_num_vars_per_constraint(mut self, num_vars: usize) -> Self {
        self.num_vars_per_constraint = Some(num_vars);
        self
    }

    /// Appends a variable with its ordered domain.
    pub fn add_variable(&mut self, variable: K, domain: impl IntoIterator<Item = V>) {
        self.variables.push(variable);
        self.domains.push(domain.into_iter().collect());
    }

    /// Appends a constraint.
    pub fn add_constraint(&mut self, constraint: FuzzyConstraint<V>) {
        self.constraints.push(constraint);
    }

    /// Domains in variable order.
    pub fn domains(&self) -> &[Vec<V>] {
        &self.domains
    }
}

impl<K, V> FuzzyProblem<K, V>
where
    K: Eq + Hash + Debug,
    V: PartialEq + Debug,
{
    /// Checks the problem definition.
    ///
    /// Rejects duplicate variables, constraint entries whose length differs
    /// from the number of variables, degrees outside `[0, 1]`, and entries
    /// naming a value outside the variable's domain.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.variables.len());
        for variable in &self.variables {
            if !seen.insert(variable) {
                return Err(FuzzyForgeError::InvalidProblem(format!(
                    "variable {:?} is declared more than once",
                    variable
                )));
            }
        }

        let n_vars = self.variables.len();
        for constraint in &self.constraints {
            for (entry_idx, (assignment, degree)) in constraint.entries().iter().enumerate() {
                if assignment.len() != n_vars {
                    return Err(FuzzyForgeError::InvalidProblem(format!(
                        "constraint '{}' entry {} has {} slots, expected {}",
                        constraint.name(),
                        entry_idx,
                        assignment.len(),
                        n_vars
                    )));
                }
                if !(0.0..=1.0).contains(degree) {
                    return Err(FuzzyForgeError::InvalidProblem(format!(
                        "constraint '{}' entry {} has degree {} outside [0, 1]",
                        constraint.name(),
                        entry_idx,
                        degree
                    )));
                }
                for (position, slot) in assignment.slots().iter().enumerate() {
                    if let Some(value) = slot {
                        if !self.domains[position].contains(value) {
                            return Err(FuzzyForgeError::InvalidProblem(format!(
                                "constraint '{}' entry {} assigns {:?} to {:?}, which is not in its domain",
                                constraint.name(),
                                entry_idx,
                                value,
                                self.variables[position]
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

impl<K, V> Problem for FuzzyProblem<K, V>
where
    K: Clone + Eq + Hash + Debug,
    V: Clone + Eq + Hash + Debug,
{
    type Var = K;
    type Value = V;

    fn variables(&self) -> &[K] {
        &self.variables
    }

    fn domain(&self, variable: &K) -> Option<&[V]> {
        self.variable_index(variable)
            .map(|index| self.domains[index].as_slice())
    }

    fn constraints(&self) -> &[FuzzyConstraint<V>] {
        &self.constraints
    }

    fn num_vars_per_constraint(&self) -> usize {
        self.num_vars_per_constraint.unwrap_or_else(|| {
            self.constraints
                .iter()
                .map(FuzzyConstraint::arity)
                .max()
                .unwrap_or(0)
        })
    }

    fn domain_at(&self, index: usize) -> Option<&[V]> {
        self.domains.get(index).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> FuzzyProblem<&'static str, i32> {
        FuzzyProblem::new()
            .with_variable("x", [1, 2])
            .with_variable("y", [1, 2, 3])
            .with_variable("z", [7])
            .with_constraint(FuzzyConstraint::new("xy").with_entry(vec![Some(1), Some(3), None], 0.8))
            .with_constraint(FuzzyConstraint::new("z").with_entry(vec![None, None, Some(7)], 1.0))
    }

    #[test]
    fn test_accessors() {
        let p = problem();
        assert_eq!(p.variables(), &["x", "y", "z"]);
        assert_eq!(p.variable_index(&"y"), Some(1));
        assert_eq!(p.variable_index(&"w"), None);
        assert_eq!(p.domain(&"y"), Some(&[1, 2, 3][..]));
        assert_eq!(p.domain(&"w"), None);
        assert_eq!(p.domain_at(2), Some(&[7][..]));
        assert_eq!(p.domain_at(3), None);
        assert_eq!(p.constraints().len(), 2);
    }

    #[test]
    fn test_num_vars_per_constraint_derived_from_scopes() {
        assert_eq!(problem().num_vars_per_constraint(), 2);
        assert_eq!(problem().with_num_vars_per_constraint(3).num_vars_per_constraint(), 3);
        assert_eq!(FuzzyProblem::<u8, u8>::new().num_vars_per_constraint(), 0);
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(problem().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_variable() {
        let p = problem().with_variable("x", [1]);
        assert!(matches!(p.validate(), Err(FuzzyForgeError::InvalidProblem(_))));
    }

    #[test]
    fn test_validate_rejects_short_entry() {
        let p = problem().with_constraint(FuzzyConstraint::new("short").with_entry(vec![Some(1)], 1.0));
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("short"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_degree() {
        let p = problem().with_constraint(
            FuzzyConstraint::new("big").with_entry(vec![Some(1), None, None], 1.5),
        );
        assert!(p.validate().is_err());

        let p = problem().with_constraint(
            FuzzyConstraint::new("nan").with_entry(vec![Some(1), None, None], f64::NAN),
        );
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_value_outside_domain() {
        let p = problem().with_constraint(
            FuzzyConstraint::new("bad_value").with_entry(vec![None, Some(9), None], 0.5),
        );
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("bad_value"));
    }
}
