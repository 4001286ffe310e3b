//! Selection rules for the heuristic search.
//!
//! Both rules are strict comparisons, so the first candidate in problem order
//! wins ties.

/// Index of the candidate with the smallest difficulty.
///
/// Candidates whose difficulty is not below positive infinity (NaN or
/// infinite) are never selected, so `None` is returned when no candidate has
/// a finite difficulty.
pub fn least_difficult<I>(difficulties: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut least = f64::INFINITY;
    let mut selected = None;
    for (index, difficulty) in difficulties.into_iter().enumerate() {
        if difficulty < least {
            least = difficulty;
            selected = Some(index);
        }
    }
    selected
}

/// Index of the value with the highest appropriateness.
///
/// An appropriateness of 0.0 is not a good value: `None` is returned when no
/// value is above zero.
pub fn most_appropriate<V>(appropriateness: &[(V, f64)]) -> Option<usize> {
    let mut best = 0.0;
    let mut selected = None;
    for (index, (_, value_appropriateness)) in appropriateness.iter().enumerate() {
        if *value_appropriateness > best {
            best = *value_appropriateness;
            selected = Some(index);
        }
    }
    selected
}
