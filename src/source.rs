//! Dataset resolution shared by the subcommands.

use anyhow::{Context, Result};
use loocv_io::{load_dataset, parse_dataset};
use loocv_knn::Dataset;
use tracing::info;

use crate::cli::DatasetArgs;
use crate::config::LoocvConfig;
use crate::convert;

/// Demo dataset used when no path is configured.
const DEMO_ARFF: &str = include_str!("../data/demo.arff");

/// Reads the TOML config and applies the dataset overrides from the CLI.
pub fn load_config(source: &DatasetArgs) -> Result<LoocvConfig> {
    let mut config = LoocvConfig::load(source.config.as_deref())?;
    if let Some(path) = &source.dataset {
        config.io.dataset = Some(path.clone());
    }
    if let Some(name) = &source.class_attribute {
        config.io.class_attribute = Some(name.clone());
    }
    Ok(config)
}

/// Loads the dataset named by `config.io`, or the built-in demo dataset.
pub fn load(config: &LoocvConfig) -> Result<Dataset> {
    let loader_cfg = convert::build_loader_config(&config.io);
    match &config.io.dataset {
        Some(path) => load_dataset(path, &loader_cfg)
            .with_context(|| format!("failed to load dataset: {}", path.display())),
        None => {
            info!("no dataset configured, using built-in demo dataset");
            parse_dataset(DEMO_ARFF, &loader_cfg).context("failed to parse built-in demo dataset")
        }
    }
}
