use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use loocv_knn::{KnnConfig, Metric};
use serde::Deserialize;

/// Top-level loocv configuration.
///
/// Every table is optional; a missing file section falls back to its
/// defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoocvConfig {
    /// Classifier settings.
    #[serde(default)]
    pub knn: KnnToml,

    /// Dataset loading settings.
    #[serde(default)]
    pub io: IoToml,

    /// Evaluation settings.
    #[serde(default)]
    pub evaluate: EvaluateToml,
}

impl LoocvConfig {
    /// Reads the TOML file at `path`, or returns defaults when `path` is
    /// `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnnToml {
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_distance")]
    pub distance: String,
}

impl Default for KnnToml {
    fn default() -> Self {
        Self {
            k: default_k(),
            distance: default_distance(),
        }
    }
}

/// Same neighbor count as [`KnnConfig::default`].
fn default_k() -> usize {
    KnnConfig::<Metric>::default().k()
}
fn default_distance() -> String {
    "euclidean".to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// ARFF file to load; `None` selects the demo dataset built into the binary.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    #[serde(default)]
    pub class_attribute: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluateToml {
    #[serde(default)]
    pub parallel: bool,
}
