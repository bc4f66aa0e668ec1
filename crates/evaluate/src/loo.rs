//! Leave-one-out evaluation loop.

use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use loocv_knn::{
    Dataset, DistanceMeasure, KnnConfig, KnnError, NeighborScratch,
    classify_held_out_with_scratch,
};

use crate::config::EvaluateConfig;
use crate::error::EvaluateError;
use crate::summary::{EvaluationSummary, Outcome};

/// Result of a leave-one-out run.
#[derive(Debug, Clone)]
pub struct Evaluation {
    summary: EvaluationSummary,
    outcomes: Vec<Outcome>,
}

impl Evaluation {
    /// Returns the finalized counters.
    pub fn summary(&self) -> &EvaluationSummary {
        &self.summary
    }

    /// Returns one outcome per instance, in dataset order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}

/// Classifies every instance of `dataset` against all the others.
///
/// Each instance is held out in turn, its `k` nearest neighbors among the
/// rest are selected and their majority label is compared with its own.
/// The first failure aborts the run; no partial summary is produced.
///
/// With [`EvaluateConfig::with_parallel`] the per-instance work runs on the
/// rayon pool. Outcomes are still aggregated in dataset order by a single
/// owner, so both modes give identical results; `elapsed` is the wall-clock
/// span of the whole loop in either case.
///
/// # Errors
///
/// - [`KnnError::InvalidK`] if `k == 0`.
/// - [`KnnError::InsufficientNeighbors`] if the dataset has fewer than
///   `k + 1` instances, raised before any instance is evaluated.
/// - Any error from the distance measure.
#[tracing::instrument(
    skip_all,
    fields(n = dataset.len(), k = knn.k(), distance = knn.distance().name(), parallel = config.parallel())
)]
pub fn leave_one_out<D>(
    dataset: &Dataset,
    knn: &KnnConfig<D>,
    config: &EvaluateConfig,
) -> Result<Evaluation, EvaluateError>
where
    D: DistanceMeasure + Sync,
{
    knn.validate()?;
    if !dataset.is_empty() && dataset.len() - 1 < knn.k() {
        return Err(KnnError::InsufficientNeighbors {
            k: knn.k(),
            available: dataset.len() - 1,
        }
        .into());
    }

    let start = Instant::now();
    let mut summary = EvaluationSummary::default();

    let outcomes = if config.parallel() {
        let outcomes = (0..dataset.len())
            .into_par_iter()
            .map_init(
                || NeighborScratch::new(dataset.len()),
                |scratch, i| evaluate_one(dataset, i, knn, scratch),
            )
            .collect::<Result<Vec<_>, _>>()?;
        for outcome in &outcomes {
            summary.record_outcome(outcome.is_correct());
        }
        outcomes
    } else {
        let mut scratch = NeighborScratch::new(dataset.len());
        let mut outcomes = Vec::with_capacity(dataset.len());
        for i in 0..dataset.len() {
            let outcome = evaluate_one(dataset, i, knn, &mut scratch)?;
            summary.record_outcome(outcome.is_correct());
            outcomes.push(outcome);
        }
        outcomes
    };

    summary.finalize(start.elapsed());
    debug!(
        correct = summary.correct(),
        total = summary.total(),
        elapsed_s = summary.elapsed_seconds(),
        "leave-one-out complete"
    );

    Ok(Evaluation { summary, outcomes })
}

fn evaluate_one<D: DistanceMeasure>(
    dataset: &Dataset,
    index: usize,
    knn: &KnnConfig<D>,
    scratch: &mut NeighborScratch,
) -> Result<Outcome, KnnError> {
    let predicted = classify_held_out_with_scratch(dataset, index, knn, scratch)?;
    let actual = dataset.instances()[index].label();
    Ok(Outcome {
        index,
        predicted: predicted.clone(),
        actual: actual.clone(),
    })
}
