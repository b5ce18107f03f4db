//! ECG and EEG sample types.
//!
//! Field names on the wire are part of the dashboard contract: `timestamp`,
//! `value` / the four band names, `isAnomaly`, and `anomalyContext` (omitted
//! until attached). Keep the serde renames intact.

use anomaly_spi::{AnomalyContext, ChannelRecord};
use serde::{Deserialize, Serialize};

/// A single synthetic ECG sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcgSample {
    /// Sample time in epoch milliseconds.
    pub timestamp: i64,
    /// Composite waveform amplitude.
    pub value: f64,
    /// Outlier label written by the scorer.
    pub is_anomaly: bool,
    /// Neighbor context, attached only to interior anomalies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_context: Option<Box<AnomalyContext<EcgSample>>>,
}

impl EcgSample {
    /// Channels used for outlier scoring, in scoring order.
    pub const SCORING_CHANNELS: &'static [&'static str] = &["value"];

    /// Create an unlabeled sample.
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self {
            timestamp,
            value,
            is_anomaly: false,
            anomaly_context: None,
        }
    }
}

impl ChannelRecord for EcgSample {
    fn channel(&self, name: &str) -> Option<f64> {
        match name {
            "value" => Some(self.value),
            _ => None,
        }
    }

    fn is_anomalous(&self) -> bool {
        self.is_anomaly
    }

    fn set_anomalous(&mut self, flag: bool) {
        self.is_anomaly = flag;
    }

    fn set_context(&mut self, context: AnomalyContext<Self>) {
        self.anomaly_context = Some(Box::new(context));
    }
}

/// A single synthetic EEG sample carrying the four classic band amplitudes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EegSample {
    /// Sample time in epoch milliseconds.
    pub timestamp: i64,
    /// Alpha band amplitude.
    pub alpha: f64,
    /// Beta band amplitude.
    pub beta: f64,
    /// Theta band amplitude.
    pub theta: f64,
    /// Delta band amplitude.
    pub delta: f64,
    /// Outlier label written by the scorer.
    pub is_anomaly: bool,
    /// Neighbor context, attached only to interior anomalies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_context: Option<Box<AnomalyContext<EegSample>>>,
}

impl EegSample {
    /// Channels used for outlier scoring, in scoring order.
    pub const SCORING_CHANNELS: &'static [&'static str] = &["alpha", "beta", "theta", "delta"];

    /// Create an unlabeled sample.
    pub fn new(timestamp: i64, alpha: f64, beta: f64, theta: f64, delta: f64) -> Self {
        Self {
            timestamp,
            alpha,
            beta,
            theta,
            delta,
            is_anomaly: false,
            anomaly_context: None,
        }
    }
}

impl ChannelRecord for EegSample {
    fn channel(&self, name: &str) -> Option<f64> {
        match name {
            "alpha" => Some(self.alpha),
            "beta" => Some(self.beta),
            "theta" => Some(self.theta),
            "delta" => Some(self.delta),
            _ => None,
        }
    }

    fn is_anomalous(&self) -> bool {
        self.is_anomaly
    }

    fn set_anomalous(&mut self, flag: bool) {
        self.is_anomaly = flag;
    }

    fn set_context(&mut self, context: AnomalyContext<Self>) {
        self.anomaly_context = Some(Box::new(context));
    }
}
