//! Batch outlier scorer.

use anomaly_api::IsolationForestConfig;
use anomaly_spi::{AnomalyError, ChannelRecord, OutlierEnsemble, OutlierVerdict, Result};

use super::features::build_features;
use super::forest::IsolationForest;

/// Labels a batch of records by fitting a fresh isolation forest on it.
///
/// The scorer itself holds only configuration. Every `score` call constructs
/// and fits its own ensemble, so concurrent callers cannot couple through
/// shared fit state and no model survives the call.
#[derive(Debug, Clone)]
pub struct OutlierScorer {
    config: IsolationForestConfig,
}

impl OutlierScorer {
    /// Create a scorer with the given ensemble configuration.
    pub fn new(config: IsolationForestConfig) -> Self {
        Self { config }
    }

    /// The ensemble configuration applied on each call.
    pub fn config(&self) -> &IsolationForestConfig {
        &self.config
    }

    /// Score the batch on the given channels, writing `is_anomaly` in place.
    ///
    /// Expects at least two records; the expected anomalous fraction tracks
    /// the configured contamination but is not exact.
    pub fn score<R: ChannelRecord>(
        &self,
        batch: &mut [R],
        channels: &[&str],
    ) -> Result<OutlierVerdict> {
        if batch.len() < 2 {
            return Err(AnomalyError::InsufficientData {
                required: 2,
                got: batch.len(),
            });
        }

        let features = build_features(batch, channels)?;

        let mut forest = IsolationForest::new(self.config.clone());
        let verdict = forest.fit_predict(&features)?;

        for (record, &flag) in batch.iter_mut().zip(verdict.is_anomaly.iter()) {
            record.set_anomalous(flag);
        }
        Ok(verdict)
    }
}

impl Default for OutlierScorer {
    fn default() -> Self {
        Self::new(IsolationForestConfig::default())
    }
}
