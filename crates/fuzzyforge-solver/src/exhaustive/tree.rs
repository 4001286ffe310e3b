//! Search tree over the problem's ordered variables.
//!
//! Every value of the variable at position `i` has the whole domain of the
//! variable at `i + 1` as children; values of the last variable are leaves.
//! Nodes are keyed by `(position, value)`, so domains that share values
//! across variables do not collide.

use std::collections::HashMap;
use std::hash::Hash;

use fuzzyforge_core::Problem;

/// Value-indexed adjacency structure of the search space.
///
/// # Example
///
/// ```
/// use fuzzyforge_core::FuzzyProblem;
/// use fuzzyforge_solver::SearchTree;
///
/// let problem: FuzzyProblem<&str, char> = FuzzyProblem::new()
///     .with_variable("first", ['a', 'b'])
///     .with_variable("second", ['c', 'd']);
///
/// let tree = SearchTree::build(&problem);
/// assert_eq!(tree.children(0, &'a'), Some(&['c', 'd'][..]));
/// assert_eq!(tree.children(1, &'d'), Some(&[][..]));
/// assert_eq!(tree.children(1, &'a'), None);
/// ```
#[derive(Debug, Clone)]
pub struct SearchTree<V> {
    levels: Vec<HashMap<V, Vec<V>>>,
}

impl<V: Clone + Eq + Hash> SearchTree<V> {
    /// Builds the tree from the problem's variables and domains.
    pub fn build<P>(problem: &P) -> Self
    where
        P: Problem<Value = V>,
    {
        let n_vars = problem.variables().len();
        let levels = (0..n_vars)
            .map(|position| {
                let values = problem.domain_at(position).unwrap_or(&[]);
                let children = if position + 1 < n_vars {
                    problem.domain_at(position + 1).unwrap_or(&[]).to_vec()
                } else {
                    Vec::new()
                };
                values
                    .iter()
                    .map(|value| (value.clone(), children.clone()))
                    .collect()
            })
            .collect();
        Self { levels }
    }

    /// Children of `value` at `position`, or `None` if the tree has no such
    /// node.
    pub fn children(&self, position: usize, value: &V) -> Option<&[V]> {
        self.levels
            .get(position)
            .and_then(|level| level.get(value))
            .map(Vec::as_slice)
    }

    /// Returns whether `value` is a node at `position` with no children.
    pub fn is_leaf(&self, position: usize, value: &V) -> bool {
        self.children(position, value)
            .is_some_and(|children| children.is_empty())
    }
}

impl<V> SearchTree<V> {
    /// Number of levels, one per variable.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.levels.iter().map(HashMap::len).sum()
    }

    /// Returns whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
