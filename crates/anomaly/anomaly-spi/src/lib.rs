//! Outlier Scoring Service Provider Interface
//!
//! Defines traits and types for batch outlier detection over channel-bearing
//! telemetry records.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{ChannelRecord, OutlierEnsemble};
pub use error::{AnomalyError, Result};
pub use model::{AnomalyContext, OutlierVerdict};
