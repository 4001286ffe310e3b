//! Fixed-variable assignments.

/// Variables fixed so far, in the order they were fixed.
///
/// # Example
///
/// ```
/// use fuzzyforge_solver::FixedAssignment;
///
/// let mut fixed = FixedAssignment::new();
/// fixed.insert("y", 2);
/// fixed.insert("x", 1);
///
/// assert_eq!(fixed.get(&"x"), Some(&1));
/// assert_eq!(fixed.variables(), &["y", "x"]);
/// assert_eq!(fixed.to_instantiation(&["x", "y"]), Some(vec![1, 2]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedAssignment<K, V> {
    variables: Vec<K>,
    values: Vec<V>,
}

impl<K, V> Default for FixedAssignment<K, V> {
    fn default() -> Self {
        Self {
            variables: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<K, V> FixedAssignment<K, V> {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty assignment with room for `capacity` variables.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            variables: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Fixed variables, in fixing order.
    pub fn variables(&self) -> &[K] {
        &self.variables
    }

    /// Fixed values, parallel to [`variables`](Self::variables).
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Number of fixed variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns whether no variable is fixed.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over `(variable, value)` pairs in fixing order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.variables.iter().zip(&self.values)
    }
}

impl<K: PartialEq, V> FixedAssignment<K, V> {
    /// Returns whether `variable` is fixed.
    pub fn contains(&self, variable: &K) -> bool {
        self.variables.contains(variable)
    }

    /// Value fixed for `variable`.
    pub fn get(&self, variable: &K) -> Option<&V> {
        self.variables
            .iter()
            .position(|v| v == variable)
            .map(|index| &self.values[index])
    }

    /// Fixes `variable` to `value`, returning the previous value if any.
    pub fn insert(&mut self, variable: K, value: V) -> Option<V> {
        match self.variables.iter().position(|v| *v == variable) {
            Some(index) => Some(std::mem::replace(&mut self.values[index], value)),
            None => {
                self.variables.push(variable);
                self.values.push(value);
                None
            }
        }
    }
}

impl<K: PartialEq, V: Clone> FixedAssignment<K, V> {
    /// Projects the assignment onto `order`.
    ///
    /// Returns `None` if a variable of `order` is not fixed.
    pub fn to_instantiation(&self, order: &[K]) -> Option<Vec<V>> {
        order
            .iter()
            .map(|variable| self.get(variable).cloned())
            .collect()
    }
}
