//! Telemetry Synthesis API
//!
//! Configuration types for waveform generation. Defaults reproduce the
//! deployed signal shapes; individual parameters can be overridden to stress
//! the scoring pipeline in tests or demos.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use telemetry_spi::{ChannelModel, EcgSample, EegSample, Result, TelemetryError};

/// ECG waveform configuration.
///
/// One synthetic heartbeat spans `beat_period` steps. The P and T waves are
/// slow sinusoids; the QRS complex is a three-point spike pattern keyed on
/// the step phase: the R peak at phase 0, the S dip right after it, and the
/// Q dip on the last phase before the next beat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcgConfig {
    /// P wave amplitude (default: 0.25).
    pub p_amplitude: f64,
    /// T wave amplitude (default: 0.35).
    pub t_amplitude: f64,
    /// R peak height at beat phase 0 (default: 1.5).
    pub r_spike: f64,
    /// S dip at beat phase 1 (default: -0.3).
    pub s_dip: f64,
    /// Q dip at the final beat phase (default: -0.5).
    pub q_dip: f64,
    /// Steps per heartbeat (default: 10).
    pub beat_period: usize,
    /// Standard deviation of the per-sample Gaussian noise (default: 0.05).
    pub noise_std: f64,
}

impl Default for EcgConfig {
    fn default() -> Self {
        Self {
            p_amplitude: 0.25,
            t_amplitude: 0.35,
            r_spike: 1.5,
            s_dip: -0.3,
            q_dip: -0.5,
            beat_period: 10,
            noise_std: 0.05,
        }
    }
}

/// One EEG band: a carrier sinusoid with slow amplitude modulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandConfig {
    /// Carrier amplitude.
    pub amplitude: f64,
    /// Carrier frequency in radians per time unit.
    pub freq: f64,
    /// Modulation depth.
    pub depth: f64,
    /// Modulation frequency in radians per time unit.
    pub slow_freq: f64,
}

impl BandConfig {
    /// Create a band configuration.
    pub fn new(amplitude: f64, freq: f64, depth: f64, slow_freq: f64) -> Self {
        Self {
            amplitude,
            freq,
            depth,
            slow_freq,
        }
    }
}

/// EEG waveform configuration: the four classic bands plus shared noise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EegConfig {
    pub alpha: BandConfig,
    pub beta: BandConfig,
    pub theta: BandConfig,
    pub delta: BandConfig,
    /// Standard deviation of the per-sample Gaussian noise. One draw per
    /// sample is shared across all four bands (default: 0.05).
    pub noise_std: f64,
}

impl Default for EegConfig {
    fn default() -> Self {
        Self {
            alpha: BandConfig::new(0.5, 8.0, 0.2, 0.5),
            beta: BandConfig::new(0.3, 20.0, 0.1, 0.3),
            theta: BandConfig::new(0.4, 5.0, 0.15, 0.4),
            delta: BandConfig::new(0.6, 2.0, 0.25, 0.2),
            noise_std: 0.05,
        }
    }
}
