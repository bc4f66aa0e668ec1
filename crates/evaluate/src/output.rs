//! Report record handed to the presentation layer after a run.

use crate::config::EvaluateConfig;
use crate::error::EvaluateError;
use crate::summary::EvaluationSummary;
use loocv_knn::{Dataset, DistanceMeasure, KnnConfig};
use serde::Serialize;

/// Top-level run report.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Configuration used.
    pub config: ConfigSummary,
    /// Statistics of the evaluated dataset.
    pub dataset: DatasetSummary,
    /// Counts, rates and timing.
    pub outcome: OutcomeSummary,
}

/// Summary of the configuration used.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub k: usize,
    pub distance: String,
    pub parallel: bool,
}

/// Dataset statistics.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub name: String,
    pub n_instances: usize,
    /// Feature columns plus the class column.
    pub n_attributes: usize,
    pub n_classes: usize,
}

/// Outcome of the run.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeSummary {
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
    pub accuracy_pct: f64,
    pub error_pct: f64,
    pub elapsed_seconds: f64,
}

impl DatasetSummary {
    /// Collects the statistics of a loaded dataset.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            name: dataset.name().to_string(),
            n_instances: dataset.len(),
            n_attributes: dataset.n_features() + 1,
            n_classes: dataset.n_classes(),
        }
    }
}

impl RunReport {
    /// Assembles the report for a finished run.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::EmptyDatasetMetric`] if the summary holds no
    /// evaluated instances.
    pub fn new<D: DistanceMeasure>(
        dataset: &Dataset,
        knn: &KnnConfig<D>,
        config: &EvaluateConfig,
        summary: &EvaluationSummary,
    ) -> Result<Self, EvaluateError> {
        let accuracy = summary.try_accuracy()?;
        Ok(Self {
            config: ConfigSummary {
                k: knn.k(),
                distance: knn.distance().name().to_string(),
                parallel: config.parallel(),
            },
            dataset: DatasetSummary::from_dataset(dataset),
            outcome: OutcomeSummary {
                correct: summary.correct(),
                incorrect: summary.incorrect(),
                total: summary.total(),
                accuracy_pct: accuracy * 100.0,
                error_pct: (1.0 - accuracy) * 100.0,
                elapsed_seconds: summary.elapsed_seconds(),
            },
        })
    }
}

/// Serialize a run report to a JSON string.
pub fn to_json(report: &RunReport) -> Result<String, EvaluateError> {
    serde_json::to_string_pretty(report).map_err(|e| EvaluateError::Serialization {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use loocv_knn::{Instance, Metric};
    use std::time::Duration;

    fn dataset() -> Dataset {
        Dataset::new(
            "toy",
            vec![
                Instance::new([0.0, 0.0, 1.0], "A"),
                Instance::new([0.0, 1.0, 1.0], "B"),
                Instance::new([1.0, 1.0, 1.0], "C"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_report_fields() {
        let mut summary = EvaluationSummary::default();
        summary.record_outcome(true);
        summary.record_outcome(false);
        summary.record_outcome(true);
        summary.record_outcome(true);
        summary.finalize(Duration::from_millis(250));

        let knn = KnnConfig::new(2).with_distance(Metric::Chebyshev);
        let report = RunReport::new(&dataset(), &knn, &EvaluateConfig::default(), &summary)
            .unwrap();

        assert_eq!(report.config.k, 2);
        assert_eq!(report.config.distance, "Chebyshev");
        assert!(!report.config.parallel);
        assert_eq!(report.dataset.name, "toy");
        assert_eq!(report.dataset.n_instances, 3);
        assert_eq!(report.dataset.n_attributes, 4);
        assert_eq!(report.dataset.n_classes, 3);
        assert_eq!(report.outcome.correct, 3);
        assert_eq!(report.outcome.incorrect, 1);
        assert_eq!(report.outcome.total, 4);
        assert_eq!(report.outcome.accuracy_pct, 75.0);
        assert_eq!(report.outcome.error_pct, 25.0);
        assert_eq!(report.outcome.elapsed_seconds, 0.25);
    }

    #[test]
    fn test_report_rejects_empty_run() {
        let summary = EvaluationSummary::default();
        let result = RunReport::new(
            &dataset(),
            &KnnConfig::new(1),
            &EvaluateConfig::default(),
            &summary,
        );
        assert!(matches!(result, Err(EvaluateError::EmptyDatasetMetric)));
    }

    #[test]
    fn test_to_json_shape() {
        let mut summary = EvaluationSummary::default();
        summary.record_outcome(true);
        let report = RunReport::new(
            &dataset(),
            &KnnConfig::new(1),
            &EvaluateConfig::default().with_parallel(true),
            &summary,
        )
        .unwrap();

        let json = to_json(&report).unwrap();
        assert!(json.contains("\"k\": 1"));
        assert!(json.contains("\"distance\": \"Euclidean\""));
        assert!(json.contains("\"parallel\": true"));
        assert!(json.contains("\"n_instances\": 3"));
        assert!(json.contains("\"accuracy_pct\": 100.0"));
    }
}
