//! Telemetry Synthesis Service Provider Interface
//!
//! Defines traits and types for generating synthetic physiological time
//! series.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ChannelModel;
pub use error::{Result, TelemetryError};
pub use model::{EcgSample, EegSample};
