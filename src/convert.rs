//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use loocv_evaluate::EvaluateConfig;
use loocv_io::LoaderConfig;
use loocv_knn::{KnnConfig, Metric};

use crate::config::{EvaluateToml, IoToml, KnnToml};

/// Parses a distance measure name string into the corresponding enum variant.
pub fn parse_metric(s: &str) -> Result<Metric> {
    match s.to_lowercase().as_str() {
        "euclidean" => Ok(Metric::Euclidean),
        "manhattan" => Ok(Metric::Manhattan),
        "chebyshev" => Ok(Metric::Chebyshev),
        "canberra" => Ok(Metric::Canberra),
        other => bail!("unknown distance measure: {other:?}"),
    }
}

/// Builds a [`KnnConfig`] from the TOML classifier configuration.
pub fn build_knn_config(knn: &KnnToml) -> Result<KnnConfig> {
    let metric = parse_metric(&knn.distance)?;
    let cfg = KnnConfig::new(knn.k).with_distance(metric);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`LoaderConfig`] from the TOML I/O configuration.
pub fn build_loader_config(io: &IoToml) -> LoaderConfig {
    LoaderConfig::default().with_class_attribute(io.class_attribute.as_deref())
}

/// Builds an [`EvaluateConfig`] from the TOML evaluate configuration.
pub fn build_evaluate_config(eval: &EvaluateToml) -> EvaluateConfig {
    EvaluateConfig::default().with_parallel(eval.parallel)
}
