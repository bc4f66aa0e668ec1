//! Human-readable rendering of run reports through `tracing`.

use loocv_evaluate::{ConfigSummary, DatasetSummary, OutcomeSummary, RunReport};
use tracing::info;

/// Logs the dataset statistics section.
pub fn log_dataset(dataset: &DatasetSummary) {
    info!("=== Dataset info ===");
    info!("Dataset name = {}", dataset.name);
    info!("Number of instances = {}", dataset.n_instances);
    info!("Number of attributes = {}", dataset.n_attributes);
    info!("Number of classes = {}", dataset.n_classes);
}

fn log_config(config: &ConfigSummary) {
    info!("=== Configuration ===");
    info!("K = {}", config.k);
    info!("Distance measure = {}", config.distance);
    info!("Parallel = {}", config.parallel);
}

fn log_outcome(outcome: &OutcomeSummary) {
    info!("=== Result ===");
    info!(
        "Correctly Classified Instances    {} ({:.4}%)",
        outcome.correct, outcome.accuracy_pct
    );
    info!(
        "Incorrectly Classified Instances  {} ({:.4}%)",
        outcome.incorrect, outcome.error_pct
    );
    info!("Time taken to classify            {:.3} s", outcome.elapsed_seconds);
}

/// Logs every section of a finished run.
pub fn log_report(report: &RunReport) {
    log_dataset(&report.dataset);
    log_config(&report.config);
    log_outcome(&report.outcome);
}
