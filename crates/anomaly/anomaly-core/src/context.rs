//! Deviation context for anomalous records.

use anomaly_spi::{AnomalyContext, AnomalyError, ChannelRecord, Result};

/// Attach neighbor context to every interior anomalous record.
///
/// For each anomalous index `i` with `0 < i < n - 1`, the record receives
/// snapshots of its immediate neighbors and its deviation over the 3-point
/// window `{i-1, i, i+1}` of `primary_channel` values: distance from the
/// window mean normalized by the window standard deviation, or 0 when the
/// window has zero variance. Anomalies at the batch boundaries get no
/// context. Returns the number of records annotated.
pub fn attach_context<R: ChannelRecord>(batch: &mut [R], primary_channel: &str) -> Result<usize> {
    let n = batch.len();
    let mut attached = 0;

    for i in 1..n.saturating_sub(1) {
        if !batch[i].is_anomalous() {
            continue;
        }

        let window = [
            channel_value(&batch[i - 1], primary_channel)?,
            channel_value(&batch[i], primary_channel)?,
            channel_value(&batch[i + 1], primary_channel)?,
        ];
        let deviation = window_deviation(window[1], &window);

        let previous = batch[i - 1].clone();
        let next = batch[i + 1].clone();
        batch[i].set_context(AnomalyContext::new(previous, next, deviation));
        attached += 1;
    }
    Ok(attached)
}

fn channel_value<R: ChannelRecord>(record: &R, name: &str) -> Result<f64> {
    record.channel(name).ok_or_else(|| AnomalyError::FeatureExtraction {
        channel: name.to_string(),
    })
}

fn window_deviation(value: f64, window: &[f64]) -> f64 {
    let n = window.len() as f64;
    let mean = window.iter().sum::<f64>() / n;
    let std_dev = (window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
    if std_dev == 0.0 {
        return 0.0;
    }
    (value - mean).abs() / std_dev
}
