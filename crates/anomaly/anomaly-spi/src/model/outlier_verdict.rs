//! Outlier scoring result types.

use serde::{Deserialize, Serialize};

/// Result of one live batch scoring pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierVerdict {
    /// Boolean mask indicating outliers.
    pub is_anomaly: Vec<bool>,
    /// Anomaly scores for each row, higher is more anomalous.
    pub scores: Vec<f64>,
    /// Score threshold used for the labeling decision.
    pub threshold: f64,
}

impl OutlierVerdict {
    /// Create a new verdict.
    pub fn new(is_anomaly: Vec<bool>, scores: Vec<f64>, threshold: f64) -> Self {
        Self {
            is_anomaly,
            scores,
            threshold,
        }
    }

    /// Get indices of detected outliers.
    pub fn anomaly_indices(&self) -> Vec<usize> {
        self.is_anomaly
            .iter()
            .enumerate()
            .filter_map(|(i, &flag)| if flag { Some(i) } else { None })
            .collect()
    }

    /// Count of detected outliers.
    pub fn anomaly_count(&self) -> usize {
        self.is_anomaly.iter().filter(|&&flag| flag).count()
    }
}
