//! Held-out classification entry point.

use crate::config::KnnConfig;
use crate::dataset::{Dataset, Label};
use crate::distance::DistanceMeasure;
use crate::error::KnnError;
use crate::select::{NeighborScratch, select_k_nearest_with_scratch};
use crate::vote::majority_vote;

/// Predicts the label of `dataset[query]` from the other instances.
///
/// This is the simple entry point. For loops over many queries, use
/// [`classify_held_out_with_scratch`] to reuse the candidate buffer.
///
/// # Errors
///
/// Returns [`KnnError`] if the config is invalid, `query` is out of range,
/// fewer than `k` other instances exist, or the distance measure fails.
pub fn classify_held_out<'d, D: DistanceMeasure>(
    dataset: &'d Dataset,
    query: usize,
    config: &KnnConfig<D>,
) -> Result<&'d Label, KnnError> {
    let mut scratch = NeighborScratch::new(dataset.len());
    classify_held_out_with_scratch(dataset, query, config, &mut scratch)
}

/// Predicts the label of `dataset[query]`, reusing pre-allocated scratch buffers.
///
/// Identical to [`classify_held_out`] but avoids a heap allocation per call.
///
/// # Errors
///
/// See [`classify_held_out`].
pub fn classify_held_out_with_scratch<'d, D: DistanceMeasure>(
    dataset: &'d Dataset,
    query: usize,
    config: &KnnConfig<D>,
    scratch: &mut NeighborScratch,
) -> Result<&'d Label, KnnError> {
    config.validate()?;

    let neighbors =
        select_k_nearest_with_scratch(dataset, query, config.k(), config.distance(), scratch)?;
    let instances = dataset.instances();

    majority_vote(neighbors.iter().map(|n| instances[n.index()].label()))
}
