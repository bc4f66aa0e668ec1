//! Leave-one-out evaluation of K-nearest-neighbor classification.
//!
//! [`leave_one_out`] holds out every instance of a dataset in turn, predicts
//! its label from the remaining instances and tallies the results in an
//! [`EvaluationSummary`]. [`RunReport`] turns a finished run into a record
//! for the presentation layer; this crate never prints or logs results
//! itself beyond `tracing` diagnostics.
//!
//! ```
//! use loocv_evaluate::{EvaluateConfig, RunReport, leave_one_out};
//! use loocv_knn::{Dataset, Instance, KnnConfig};
//!
//! let dataset = Dataset::new(
//!     "toy",
//!     vec![
//!         Instance::new([0.0, 0.0], "A"),
//!         Instance::new([0.0, 1.0], "A"),
//!         Instance::new([10.0, 10.0], "B"),
//!         Instance::new([10.0, 11.0], "B"),
//!     ],
//! )
//! .unwrap();
//!
//! let knn = KnnConfig::new(1);
//! let config = EvaluateConfig::default();
//! let eval = leave_one_out(&dataset, &knn, &config).unwrap();
//! assert_eq!(eval.summary().accuracy(), 1.0);
//!
//! let report = RunReport::new(&dataset, &knn, &config, eval.summary()).unwrap();
//! assert_eq!(report.outcome.accuracy_pct, 100.0);
//! ```

mod config;
mod error;
mod loo;
mod output;
mod summary;

pub use config::EvaluateConfig;
pub use error::EvaluateError;
pub use loo::{Evaluation, leave_one_out};
pub use output::{ConfigSummary, DatasetSummary, OutcomeSummary, RunReport, to_json};
pub use summary::{EvaluationSummary, Outcome};
