//! Outlier Scoring API
//!
//! Configuration types for outlier scoring.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{
    AnomalyContext, AnomalyError, ChannelRecord, OutlierEnsemble, OutlierVerdict, Result,
};

/// Isolation forest configuration.
///
/// Defaults mirror the deployed detector: 10% expected contamination, a
/// 100-tree ensemble, automatic subsample size, and a fixed seed so repeated
/// runs over the same batch produce the same labeling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsolationForestConfig {
    /// Expected fraction of outliers in a batch, used to place the decision
    /// threshold (default: 0.1).
    pub contamination: f64,
    /// Number of isolation trees in the ensemble (default: 100).
    pub tree_count: usize,
    /// Rows subsampled per tree; `None` selects `min(256, n)` (default: `None`).
    pub sample_size: Option<usize>,
    /// Seed for subsampling and split selection (default: 42).
    pub seed: u64,
}

impl Default for IsolationForestConfig {
    fn default() -> Self {
        Self {
            contamination: 0.1,
            tree_count: 100,
            sample_size: None,
            seed: 42,
        }
    }
}

impl IsolationForestConfig {
    /// Create a configuration with the given contamination.
    pub fn new(contamination: f64) -> Self {
        Self {
            contamination,
            ..Self::default()
        }
    }

    /// Override the ensemble seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Override the per-tree subsample size.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = Some(sample_size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IsolationForestConfig::default();
        assert_eq!(config.contamination, 0.1);
        assert_eq!(config.tree_count, 100);
        assert_eq!(config.sample_size, None);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_overrides() {
        let config = IsolationForestConfig::new(0.05)
            .with_seed(7)
            .with_sample_size(64);
        assert_eq!(config.contamination, 0.05);
        assert_eq!(config.seed, 7);
        assert_eq!(config.sample_size, Some(64));
    }
}
