//! Minimal channel record for unit tests.

use anomaly_spi::{AnomalyContext, ChannelRecord};

#[derive(Debug, Clone)]
pub struct PointRecord {
    pub value: f64,
    pub aux: f64,
    pub flagged: bool,
    pub context: Option<Box<AnomalyContext<PointRecord>>>,
}

impl PointRecord {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            aux: 0.0,
            flagged: false,
            context: None,
        }
    }

    pub fn series(values: &[f64]) -> Vec<PointRecord> {
        values.iter().map(|&v| Self::new(v)).collect()
    }
}

impl ChannelRecord for PointRecord {
    fn channel(&self, name: &str) -> Option<f64> {
        match name {
            "value" => Some(self.value),
            "aux" => Some(self.aux),
            _ => None,
        }
    }

    fn is_anomalous(&self) -> bool {
        self.flagged
    }

    fn set_anomalous(&mut self, flag: bool) {
        self.flagged = flag;
    }

    fn set_context(&mut self, context: AnomalyContext<Self>) {
        self.context = Some(Box::new(context));
    }
}
