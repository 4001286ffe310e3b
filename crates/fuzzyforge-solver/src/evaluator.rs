//! Constraint evaluation.
//!
//! Computes the satisfaction degree of a single fuzzy constraint and the
//! joint degree of a set of constraints for one (possibly partial)
//! instantiation.

use fuzzyforge_core::{FuzzyConstraint, JointConstraintType};

/// Evaluates fuzzy constraints against instantiations.
///
/// # Example
///
/// ```
/// use fuzzyforge_core::{FuzzyConstraint, JointConstraintType};
/// use fuzzyforge_solver::ConstraintEvaluator;
///
/// let near = FuzzyConstraint::new("near").with_entry(vec![Some(1), None], 0.6);
/// let equal = FuzzyConstraint::new("equal").with_entry(vec![Some(1), Some(1)], 0.5);
///
/// let evaluator = ConstraintEvaluator::new(JointConstraintType::Min);
/// assert_eq!(evaluator.evaluate(&near, &[1, 1]), 0.6);
/// assert_eq!(evaluator.evaluate_joint([&near, &equal], &[1, 1]), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintEvaluator {
    joint_type: JointConstraintType,
}

impl ConstraintEvaluator {
    /// Creates an evaluator combining degrees with `joint_type`.
    pub fn new(joint_type: JointConstraintType) -> Self {
        Self { joint_type }
    }

    /// Returns the joint constraint type.
    #[inline]
    pub fn joint_type(&self) -> JointConstraintType {
        self.joint_type
    }

    /// Sets the joint constraint type.
    pub fn set_joint_type(&mut self, joint_type: JointConstraintType) {
        self.joint_type = joint_type;
    }

    /// Satisfaction degree of one constraint.
    ///
    /// The degree of the first entry matching the instantiation, 0.0 when no
    /// entry matches.
    #[inline]
    pub fn evaluate<V: PartialEq>(&self, constraint: &FuzzyConstraint<V>, instantiation: &[V]) -> f64 {
        constraint.satisfaction_degree(instantiation)
    }

    /// Joint satisfaction degree of `constraints`.
    ///
    /// Returns 0.0 for an empty set of constraints.
    pub fn evaluate_joint<'c, V, I>(&self, constraints: I, instantiation: &[V]) -> f64
    where
        V: PartialEq + 'c,
        I: IntoIterator<Item = &'c FuzzyConstraint<V>>,
    {
        self.joint_type.combine(
            constraints
                .into_iter()
                .map(|constraint| self.evaluate(constraint, instantiation)),
        )
    }
}
