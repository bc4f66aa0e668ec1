//! Evaluation error types.

use loocv_knn::KnnError;

/// Errors that can occur during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    /// Neighbor selection or voting failed; the run is aborted.
    #[error(transparent)]
    Knn(#[from] KnnError),

    /// Accuracy was requested for a run that evaluated no instances.
    #[error("accuracy is undefined: no instances were evaluated")]
    EmptyDatasetMetric,

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
