//! Configuration for KNN classification.

use crate::distance::{DistanceMeasure, Metric};
use crate::error::KnnError;

/// Configuration for a KNN classification: neighbor count and distance measure.
///
/// The distance measure defaults to [`Metric`], which covers the built-in
/// measures. Any other [`DistanceMeasure`] can be plugged in with
/// [`KnnConfig::with_distance`].
///
/// # Example
///
/// ```
/// use loocv_knn::{KnnConfig, Metric, DistanceMeasure};
///
/// let config = KnnConfig::new(5).with_distance(Metric::Manhattan);
///
/// assert_eq!(config.k(), 5);
/// assert_eq!(config.distance().name(), "Manhattan");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct KnnConfig<D = Metric> {
    /// Number of nearest neighbors that vote.
    k: usize,
    /// Dissimilarity used to rank candidates.
    distance: D,
}

impl KnnConfig<Metric> {
    /// Creates a new configuration with the given k and Euclidean distance.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            distance: Metric::Euclidean,
        }
    }
}

impl<D: DistanceMeasure> KnnConfig<D> {
    /// Replaces the distance measure.
    pub fn with_distance<D2: DistanceMeasure>(self, distance: D2) -> KnnConfig<D2> {
        KnnConfig {
            k: self.k,
            distance,
        }
    }

    /// Sets the number of neighbors.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Returns the number of neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the distance measure.
    pub fn distance(&self) -> &D {
        &self.distance
    }

    /// Validates this configuration.
    ///
    /// Returns an error if k < 1.
    pub fn validate(&self) -> Result<(), KnnError> {
        if self.k < 1 {
            return Err(KnnError::InvalidK { k: self.k });
        }
        Ok(())
    }
}

impl Default for KnnConfig<Metric> {
    fn default() -> Self {
        Self::new(1)
    }
}
