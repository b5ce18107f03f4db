//! Feature matrix construction.

use anomaly_spi::{AnomalyError, ChannelRecord, Result};

/// Project a batch onto the requested channels.
///
/// Returns one row per record in batch order, columns exactly the requested
/// channels in the requested order. Fails if any record lacks a requested
/// channel.
pub fn build_features<R: ChannelRecord>(batch: &[R], channels: &[&str]) -> Result<Vec<Vec<f64>>> {
    batch
        .iter()
        .map(|record| {
            channels
                .iter()
                .map(|&name| {
                    record.channel(name).ok_or_else(|| AnomalyError::FeatureExtraction {
                        channel: name.to_string(),
                    })
                })
                .collect()
        })
        .collect()
}
