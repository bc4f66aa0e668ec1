//! # loocv-io
//!
//! Load labeled datasets from ARFF files into [`loocv_knn::Dataset`].
//!
//! Supported: `@relation`, `numeric`/`real`/`integer` and nominal `{..}`
//! attributes, `%` comments, quoted names and values. Rejected with
//! [`IoError::Unsupported`]: `string`, `date` and `relational` attributes,
//! sparse rows, and missing values (`?`).
//!
//! The class column is the last attribute unless
//! [`LoaderConfig::with_class_attribute`] names another one. Numeric
//! attributes become features verbatim; nominal features are encoded by the
//! position of the value in their declaration.

mod arff;
mod error;
mod reader;
mod validate;

pub use error::IoError;
pub use reader::{LoaderConfig, load_dataset, parse_dataset};
