//! Dataset loading configuration and orchestration.

use std::path::Path;

use loocv_knn::{Dataset, Instance, Label};
use tracing::{debug, info};

use crate::arff::{self, AttributeKind};
use crate::error::IoError;
use crate::validate::validate_header;

// ---------------------------------------------------------------------------
// LoaderConfig
// ---------------------------------------------------------------------------

/// Configuration for loading a labeled dataset from an ARFF file.
///
/// By default the last declared attribute is the class column. Use
/// [`with_class_attribute`](Self::with_class_attribute) to pick another one
/// by name.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Name of the class attribute; `None` selects the last attribute.
    class_attribute: Option<String>,
}

impl LoaderConfig {
    /// Set the class attribute by name, or `None` to use the last attribute.
    pub fn with_class_attribute(mut self, name: Option<impl Into<String>>) -> Self {
        self.class_attribute = name.map(Into::into);
        self
    }

    /// Returns the configured class attribute name, if any.
    pub fn class_attribute(&self) -> Option<&str> {
        self.class_attribute.as_deref()
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the class attribute name is blank.
    pub fn validate(&self) -> Result<(), IoError> {
        if self
            .class_attribute
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(IoError::Validation {
                count: 1,
                details: "class attribute name must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// load_dataset / parse_dataset
// ---------------------------------------------------------------------------

/// Load a labeled dataset from an ARFF file.
///
/// The relation name becomes the dataset name; files without `@relation`
/// fall back to the file stem.
///
/// # Errors
///
/// Returns [`IoError`] if the file is missing or unreadable, the ARFF text is
/// malformed or uses unsupported features, or the rows violate the dataset
/// invariants.
pub fn load_dataset(path: &Path, config: &LoaderConfig) -> Result<Dataset, IoError> {
    config.validate()?;

    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), "reading dataset");
    let text = std::fs::read_to_string(path).map_err(|e| IoError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let fallback = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dataset = parse_named(&text, config, &fallback)?;

    info!(
        name = dataset.name(),
        n_instances = dataset.len(),
        n_features = dataset.n_features(),
        n_classes = dataset.n_classes(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Parse a labeled dataset from ARFF text already in memory.
///
/// # Errors
///
/// See [`load_dataset`].
pub fn parse_dataset(text: &str, config: &LoaderConfig) -> Result<Dataset, IoError> {
    config.validate()?;
    parse_named(text, config, "")
}

fn parse_named(text: &str, config: &LoaderConfig, fallback: &str) -> Result<Dataset, IoError> {
    let (header, rows) = arff::parse(text)?;
    let class_index = validate_header(&header, config.class_attribute())?;
    debug!(
        n_attributes = header.attributes.len(),
        class = %header.attributes[class_index].name,
        n_rows = rows.len(),
        "ARFF header parsed"
    );

    let n_attributes = header.attributes.len();
    let mut instances = Vec::with_capacity(rows.len());

    for row in &rows {
        if row.values.len() != n_attributes {
            return Err(IoError::Parse {
                line: row.line,
                reason: format!(
                    "expected {n_attributes} values, got {}",
                    row.values.len()
                ),
            });
        }

        let mut features = Vec::with_capacity(n_attributes - 1);
        let mut label = None;

        for (j, (attr, value)) in header.attributes.iter().zip(&row.values).enumerate() {
            if value == "?" {
                return Err(IoError::Unsupported {
                    line: row.line,
                    feature: format!("missing value for attribute '{}'", attr.name),
                });
            }

            if j == class_index {
                let declared = match &attr.kind {
                    AttributeKind::Nominal(values) => values.contains(value),
                    AttributeKind::Numeric => true,
                };
                if !declared {
                    return Err(IoError::Parse {
                        line: row.line,
                        reason: format!("undeclared class value '{value}'"),
                    });
                }
                label = Some(Label::new(value.as_str()));
                continue;
            }

            let x = match &attr.kind {
                AttributeKind::Numeric => value.parse::<f64>().map_err(|_| IoError::Parse {
                    line: row.line,
                    reason: format!("invalid number '{value}' for attribute '{}'", attr.name),
                })?,
                // Nominal features are encoded by declaration index.
                AttributeKind::Nominal(values) => {
                    let pos = values.iter().position(|v| v == value).ok_or_else(|| {
                        IoError::Parse {
                            line: row.line,
                            reason: format!(
                                "undeclared value '{value}' for attribute '{}'",
                                attr.name
                            ),
                        }
                    })?;
                    pos as f64
                }
            };
            features.push(x);
        }

        let label = label.ok_or_else(|| IoError::Parse {
            line: row.line,
            reason: "row has no class value".to_string(),
        })?;
        instances.push(Instance::new(features, label));
    }

    let name = header.relation.unwrap_or_else(|| fallback.to_string());
    Ok(Dataset::new(name, instances)?)
}
