//! Top-k nearest neighbor selection with self-exclusion.

use crate::dataset::Dataset;
use crate::distance::DistanceMeasure;
use crate::error::KnnError;

/// A candidate neighbor: its position in the dataset and its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    index: usize,
    distance: f64,
}

impl Neighbor {
    pub(crate) fn new(index: usize, distance: f64) -> Self {
        Self { index, distance }
    }

    /// Returns the candidate's index into the dataset.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the distance from the query to this candidate.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// Reusable candidate buffer for [`select_k_nearest_with_scratch`].
///
/// One scratch per thread lets the leave-one-out loop query every instance
/// without reallocating the `n - 1` candidate list each time.
#[derive(Debug, Clone, Default)]
pub struct NeighborScratch {
    pub(crate) candidates: Vec<Neighbor>,
}

impl NeighborScratch {
    /// Creates a scratch buffer with room for `max_candidates` candidates.
    pub fn new(max_candidates: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(max_candidates),
        }
    }
}

/// Selects the `k` instances nearest to `dataset[query]`, excluding the query itself.
///
/// Allocates a fresh candidate buffer. See [`select_k_nearest_with_scratch`].
///
/// # Errors
///
/// See [`select_k_nearest_with_scratch`].
pub fn select_k_nearest<D: DistanceMeasure + ?Sized>(
    dataset: &Dataset,
    query: usize,
    k: usize,
    distance: &D,
) -> Result<Vec<Neighbor>, KnnError> {
    let mut scratch = NeighborScratch::new(dataset.len());
    select_k_nearest_with_scratch(dataset, query, k, distance, &mut scratch)?;
    Ok(scratch.candidates)
}

/// Selects the `k` instances nearest to `dataset[query]`, reusing `scratch`.
///
/// Every other instance of the dataset is a candidate; only the query's own
/// index is excluded, so duplicates of the query's feature vector still
/// count. Candidates are ranked by ascending distance with a stable sort,
/// so equal distances keep dataset order. Exactly `k` neighbors are
/// returned.
///
/// # Errors
///
/// - [`KnnError::InvalidK`] if `k == 0`.
/// - [`KnnError::QueryOutOfRange`] if `query >= dataset.len()`.
/// - [`KnnError::InsufficientNeighbors`] if fewer than `k` candidates remain.
/// - Any error from the distance measure.
pub fn select_k_nearest_with_scratch<'s, D: DistanceMeasure + ?Sized>(
    dataset: &Dataset,
    query: usize,
    k: usize,
    distance: &D,
    scratch: &'s mut NeighborScratch,
) -> Result<&'s [Neighbor], KnnError> {
    if k < 1 {
        return Err(KnnError::InvalidK { k });
    }
    let target = dataset.get(query).ok_or(KnnError::QueryOutOfRange {
        index: query,
        len: dataset.len(),
    })?;
    let available = dataset.len() - 1;
    if available < k {
        return Err(KnnError::InsufficientNeighbors { k, available });
    }

    scratch.candidates.clear();
    for (index, other) in dataset.instances().iter().enumerate() {
        if index == query {
            continue;
        }
        let d = distance.compute(target.features(), other.features())?;
        scratch.candidates.push(Neighbor::new(index, d));
    }

    // Stable: equal distances stay in dataset order.
    scratch
        .candidates
        .sort_by(|a, b| a.distance().total_cmp(&b.distance()));
    scratch.candidates.truncate(k);

    Ok(&scratch.candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Instance;
    use crate::distance::{Euclidean, Manhattan};
    use approx::assert_abs_diff_eq;

    fn line(points: &[f64]) -> Dataset {
        let instances = points.iter().map(|&x| Instance::new([x], "x")).collect();
        Dataset::new("line", instances).unwrap()
    }

    fn indices(neighbors: &[Neighbor]) -> Vec<usize> {
        neighbors.iter().map(Neighbor::index).collect()
    }

    #[test]
    fn test_k1_closest() {
        let ds = line(&[6.0, 10.0, 20.0, 5.0]);
        let nn = select_k_nearest(&ds, 0, 1, &Euclidean).unwrap();
        assert_eq!(indices(&nn), vec![3]);
        assert_abs_diff_eq!(nn[0].distance(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_excludes_query_itself() {
        let ds = line(&[0.0, 3.0, 1.0, 2.0]);
        let nn = select_k_nearest(&ds, 2, 3, &Euclidean).unwrap();
        assert!(!indices(&nn).contains(&2));
        assert_eq!(indices(&nn), vec![0, 3, 1]);
    }

    #[test]
    fn test_duplicate_of_query_is_a_candidate() {
        // Instance 1 sits on top of the query; only index 0 is excluded.
        let ds = line(&[4.0, 4.0, 9.0]);
        let nn = select_k_nearest(&ds, 0, 1, &Euclidean).unwrap();
        assert_eq!(indices(&nn), vec![1]);
        assert_eq!(nn[0].distance(), 0.0);
    }

    #[test]
    fn test_ties_keep_dataset_order() {
        // Candidates 1, 2, 3 and 4 are all at distance 1 from the query.
        let ds = line(&[0.0, 1.0, -1.0, 1.0, -1.0, 5.0]);
        let nn = select_k_nearest(&ds, 0, 3, &Euclidean).unwrap();
        assert_eq!(indices(&nn), vec![1, 2, 3]);
    }

    #[test]
    fn test_exactly_k_sorted_ascending() {
        let ds = line(&[0.0, 8.0, 3.0, 1.0, 5.0, 2.0]);
        for k in 1..ds.len() {
            let nn = select_k_nearest(&ds, 0, k, &Manhattan).unwrap();
            assert_eq!(nn.len(), k);
            assert!(nn.iter().all(|n| n.distance() >= 0.0));
            assert!(nn.windows(2).all(|w| w[0].distance() <= w[1].distance()));
        }
    }

    #[test]
    fn test_k_equals_pool_size() {
        let ds = line(&[0.0, 1.0, 2.0]);
        let nn = select_k_nearest(&ds, 1, 2, &Euclidean).unwrap();
        assert_eq!(nn.len(), 2);
    }

    #[test]
    fn test_insufficient_neighbors() {
        let ds = line(&[0.0, 1.0, 2.0]);
        let err = select_k_nearest(&ds, 0, 3, &Euclidean).unwrap_err();
        assert_eq!(err, KnnError::InsufficientNeighbors { k: 3, available: 2 });
    }

    #[test]
    fn test_invalid_k() {
        let ds = line(&[0.0, 1.0]);
        let err = select_k_nearest(&ds, 0, 0, &Euclidean).unwrap_err();
        assert_eq!(err, KnnError::InvalidK { k: 0 });
    }

    #[test]
    fn test_query_out_of_range() {
        let ds = line(&[0.0, 1.0]);
        let err = select_k_nearest(&ds, 2, 1, &Euclidean).unwrap_err();
        assert_eq!(err, KnnError::QueryOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn test_scratch_reuse_clears_buffer() {
        let ds = line(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let mut scratch = NeighborScratch::new(2);

        let first = select_k_nearest_with_scratch(&ds, 0, 3, &Euclidean, &mut scratch).unwrap();
        assert_eq!(indices(first), vec![1, 2, 3]);

        let second = select_k_nearest_with_scratch(&ds, 4, 1, &Euclidean, &mut scratch).unwrap();
        assert_eq!(indices(second), vec![3]);

        // Grown to hold n - 1 candidates, never shrunk.
        assert!(scratch.candidates.capacity() >= 4);
    }
}
