//! Error types for the loocv-knn crate.

/// Error type for all fallible operations in the loocv-knn crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when two feature vectors of different length are compared.
    #[error("cannot compare feature vectors of length {left} and {right}")]
    DimensionMismatch {
        /// Length of the first vector.
        left: usize,
        /// Length of the second vector.
        right: usize,
    },

    /// Returned when the pool holds fewer than k candidates after self-exclusion.
    #[error("k = {k} neighbors requested but only {available} candidate(s) available")]
    InsufficientNeighbors {
        /// Requested number of neighbors.
        k: usize,
        /// Candidates left once the query is excluded.
        available: usize,
    },

    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when a vote is requested over zero neighbors.
    #[error("cannot vote over an empty neighbor set")]
    EmptyNeighbors,

    /// Returned when a query index does not address an instance of the dataset.
    #[error("query index {index} out of range for dataset of {len} instance(s)")]
    QueryOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of instances in the dataset.
        len: usize,
    },

    /// Returned when an instance's dimensionality differs from the dataset's.
    #[error("instance {index} has {got} feature(s), expected {expected}")]
    InconsistentDimension {
        /// Position of the instance in the dataset.
        index: usize,
        /// Dimensionality shared by the preceding instances.
        expected: usize,
        /// Dimensionality of the offending instance.
        got: usize,
    },

    /// Returned when an instance carries NaN or infinity.
    #[error("non-finite feature value in instance {index}")]
    NonFiniteFeature {
        /// Position of the instance in the dataset.
        index: usize,
    },
}
