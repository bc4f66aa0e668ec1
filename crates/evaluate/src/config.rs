//! Evaluation configuration.

/// Configuration for the leave-one-out evaluation loop.
#[derive(Debug, Clone, Default)]
pub struct EvaluateConfig {
    parallel: bool,
}

impl EvaluateConfig {
    /// Run per-instance classification on the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns whether the loop runs in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = EvaluateConfig::default();
        assert!(!config.parallel());
    }

    #[test]
    fn test_builder_methods() {
        let config = EvaluateConfig::default().with_parallel(true);
        assert!(config.parallel());
    }

    #[test]
    fn test_clone() {
        let config1 = EvaluateConfig::default().with_parallel(true);
        let config2 = config1.clone().with_parallel(false);
        assert!(config1.parallel());
        assert!(!config2.parallel());
    }
}
