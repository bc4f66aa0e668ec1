//! Majority vote over neighbor labels.

use std::collections::HashMap;

use crate::dataset::Label;
use crate::error::KnnError;

/// Returns the most frequent label among `labels`.
///
/// `labels` must be given in ascending-distance order. Counts are keyed by
/// label only. When several labels share the highest count, the winner is the
/// first of them met in that order, i.e. the tied label held by the nearest
/// neighbor.
///
/// # Errors
///
/// Returns [`KnnError::EmptyNeighbors`] if `labels` is empty.
///
/// # Example
///
/// ```
/// use loocv_knn::{Label, majority_vote};
///
/// let labels = [Label::from("A"), Label::from("B"), Label::from("A"), Label::from("B")];
/// assert_eq!(majority_vote(&labels).unwrap(), &Label::from("A"));
/// ```
pub fn majority_vote<'a, I>(labels: I) -> Result<&'a Label, KnnError>
where
    I: IntoIterator<Item = &'a Label>,
{
    let mut counts: HashMap<&'a Label, usize> = HashMap::new();
    // Distinct labels in first-seen order, which is ascending distance.
    let mut order: Vec<&'a Label> = Vec::new();

    for label in labels {
        let count = counts.entry(label).or_insert(0);
        if *count == 0 {
            order.push(label);
        }
        *count += 1;
    }

    let mut winner: Option<(&'a Label, usize)> = None;
    for label in order {
        let count = counts[label];
        // Strictly greater: earlier labels keep ties.
        if winner.is_none_or(|(_, best)| count > best) {
            winner = Some((label, count));
        }
    }

    winner
        .map(|(label, _)| label)
        .ok_or(KnnError::EmptyNeighbors)
}
