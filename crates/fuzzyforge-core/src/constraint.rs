//! Fuzzy constraint types.
//!
//! A fuzzy constraint maps assignment tuples to satisfaction degrees,
//! conventionally in `[0, 1]`. Each tuple has one slot per problem variable;
//! a slot holds either a concrete value or a wildcard (`None`) that matches
//! any value at that position.

use std::collections::BTreeSet;

/// One tuple of a fuzzy constraint.
///
/// # Example
///
/// ```
/// use fuzzyforge_core::FuzzyAssignment;
///
/// let assignment = FuzzyAssignment::new(vec![Some(1), None, Some(3)]);
/// assert!(assignment.matches(&[1, 7, 3]));
/// assert!(!assignment.matches(&[2, 7, 3]));
///
/// // Partial instantiations only compare their own prefix.
/// assert!(assignment.matches(&[1]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuzzyAssignment<V> {
    slots: Vec<Option<V>>,
}

impl<V> FuzzyAssignment<V> {
    /// Creates an assignment from its slots. `None` is a wildcard.
    pub fn new(slots: Vec<Option<V>>) -> Self {
        Self { slots }
    }

    /// Returns the slots of this assignment.
    pub fn slots(&self) -> &[Option<V>] {
        &self.slots
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the assignment has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns whether the slot at `position` holds a concrete value.
    pub fn mentions(&self, position: usize) -> bool {
        matches!(self.slots.get(position), Some(Some(_)))
    }

    /// Iterates over the positions holding concrete values.
    pub fn concrete_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| slot.as_ref().map(|_| position))
    }
}

impl<V: PartialEq> FuzzyAssignment<V> {
    /// Returns whether every concrete slot equals the instantiation value at
    /// the same position.
    ///
    /// Positions beyond the shorter of the two sequences do not take part.
    pub fn matches(&self, instantiation: &[V]) -> bool {
        self.slots
            .iter()
            .zip(instantiation)
            .all(|(slot, value)| slot.as_ref().map_or(true, |expected| expected == value))
    }
}

impl<V> From<Vec<Option<V>>> for FuzzyAssignment<V> {
    fn from(slots: Vec<Option<V>>) -> Self {
        Self::new(slots)
    }
}

/// A fuzzy constraint: ordered `(assignment, degree)` entries.
///
/// Lookup takes the first entry whose assignment matches, so entry order is
/// significant when assignments overlap through wildcards.
///
/// # Example
///
/// ```
/// use fuzzyforge_core::FuzzyConstraint;
///
/// let constraint = FuzzyConstraint::new("prefer_equal")
///     .with_entry(vec![Some(1), Some(1)], 1.0)
///     .with_entry(vec![Some(2), Some(2)], 0.5);
///
/// assert_eq!(constraint.satisfaction_degree(&[1, 1]), 1.0);
/// assert_eq!(constraint.satisfaction_degree(&[2, 2]), 0.5);
/// assert_eq!(constraint.satisfaction_degree(&[1, 2]), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyConstraint<V> {
    name: String,
    entries: Vec<(FuzzyAssignment<V>, f64)>,
}

impl<V> FuzzyConstraint<V> {
    /// Creates an empty constraint.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn with_entry(mut self, assignment: impl Into<FuzzyAssignment<V>>, degree: f64) -> Self {
        self.add_entry(assignment, degree);
        self
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, assignment: impl Into<FuzzyAssignment<V>>, degree: f64) {
        self.entries.push((assignment.into(), degree));
    }

    /// Returns the name of this constraint.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the entries in lookup order.
    pub fn entries(&self) -> &[(FuzzyAssignment<V>, f64)] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the constraint has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Positions holding a concrete value in at least one entry.
    pub fn scope(&self) -> BTreeSet<usize> {
        self.entries
            .iter()
            .flat_map(|(assignment, _)| assignment.concrete_positions())
            .collect()
    }

    /// Number of variables this constraint refers to.
    pub fn arity(&self) -> usize {
        self.scope().len()
    }

    /// Returns whether every position in `positions` is in the scope.
    pub fn mentions_all(&self, positions: &[usize]) -> bool {
        positions.iter().all(|&position| {
            self.entries
                .iter()
                .any(|(assignment, _)| assignment.mentions(position))
        })
    }
}

impl<V: PartialEq> FuzzyConstraint<V> {
    /// Satisfaction degree of this constraint for a (possibly partial)
    /// instantiation.
    ///
    /// Returns the degree of the first matching entry, or 0.0 if no entry
    /// matches.
    pub fn satisfaction_degree(&self, instantiation: &[V]) -> f64 {
        self.entries
            .iter()
            .find(|(assignment, _)| assignment.matches(instantiation))
            .map_or(0.0, |(_, degree)| *degree)
    }
}
