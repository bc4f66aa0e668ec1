//! Error types for loocv-io.

use std::path::PathBuf;

use loocv_knn::KnnError;

/// Error type for all fallible operations in the loocv-io crate.
///
/// This enum covers file access failures, ARFF syntax errors, ARFF features
/// the loader does not handle, and datasets that violate the classification
/// core's invariants.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a file exists but cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a line of the ARFF text is malformed.
    #[error("parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Returned when the ARFF text uses a feature the loader does not handle.
    #[error("unsupported at line {line}: {feature}")]
    Unsupported {
        /// 1-based line number.
        line: usize,
        /// The unsupported construct.
        feature: String,
    },

    /// Returned when one or more header checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Wraps a dataset invariant violation from loocv-knn.
    #[error("invalid dataset: {reason}")]
    InvalidDataset {
        /// Description of the violated invariant.
        reason: String,
    },
}

impl From<KnnError> for IoError {
    fn from(e: KnnError) -> Self {
        IoError::InvalidDataset {
            reason: e.to_string(),
        }
    }
}
