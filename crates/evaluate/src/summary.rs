//! Correct/total counters and elapsed time for one evaluation run.

use std::time::Duration;

use loocv_knn::Label;

use crate::error::EvaluateError;

/// Prediction for one held-out instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Position of the instance in the dataset.
    pub index: usize,
    /// Label chosen by the majority vote.
    pub predicted: Label,
    /// Label recorded in the dataset.
    pub actual: Label,
}

impl Outcome {
    /// Returns `true` if the prediction matches the recorded label.
    pub fn is_correct(&self) -> bool {
        self.predicted == self.actual
    }
}

/// Running tally of a leave-one-out run.
///
/// Counters only grow; [`finalize`](Self::finalize) stores the wall-clock
/// span once the loop has finished.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationSummary {
    total: usize,
    correct: usize,
    elapsed: Duration,
}

impl EvaluationSummary {
    /// Records one evaluated instance.
    pub fn record_outcome(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Stores the wall-clock duration of the whole loop.
    pub fn finalize(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Number of instances evaluated.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of correct predictions.
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Number of wrong predictions.
    pub fn incorrect(&self) -> usize {
        self.total - self.correct
    }

    /// Wall-clock duration of the loop.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Wall-clock duration of the loop in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Fraction of correct predictions, `NaN` when nothing was evaluated.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return f64::NAN;
        }
        self.correct as f64 / self.total as f64
    }

    /// `1 - accuracy`, `NaN` when nothing was evaluated.
    pub fn error_rate(&self) -> f64 {
        1.0 - self.accuracy()
    }

    /// Fraction of correct predictions.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::EmptyDatasetMetric`] if `total == 0`.
    pub fn try_accuracy(&self) -> Result<f64, EvaluateError> {
        if self.total == 0 {
            return Err(EvaluateError::EmptyDatasetMetric);
        }
        Ok(self.accuracy())
    }
}
