//! # anomaly
//!
//! Unsupervised outlier scoring for telemetry batches.
//!
//! This facade provides a single entry point to the scoring pipeline:
//! - `ChannelRecord` and `OutlierEnsemble` traits, errors, and result models
//!   from SPI
//! - `IsolationForestConfig` from API
//! - `build_features`, `IsolationForest`, `OutlierScorer`, and
//!   `attach_context` from Core

// Re-export everything from SPI
pub use anomaly_spi::*;

// Re-export everything from API
pub use anomaly_api::*;

// Re-export everything from Core
pub use anomaly_core::*;
