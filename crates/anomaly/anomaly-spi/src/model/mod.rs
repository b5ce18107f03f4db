//! Model types for outlier scoring.

mod anomaly_context;
mod outlier_verdict;

pub use anomaly_context::AnomalyContext;
pub use outlier_verdict::OutlierVerdict;
