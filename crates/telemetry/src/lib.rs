//! # telemetry
//!
//! Synthetic physiological waveform generation.
//!
//! This facade provides a single entry point to waveform synthesis:
//! - `ChannelModel` trait, sample models, and errors from SPI
//! - `EcgConfig`, `EegConfig`, and `BandConfig` from API
//! - `WaveformSynthesizer`, `EcgModel`, and `EegModel` from Core

// Re-export everything from SPI
pub use telemetry_spi::*;

// Re-export everything from API
pub use telemetry_api::*;

// Re-export everything from Core
pub use telemetry_core::*;
