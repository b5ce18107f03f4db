//! Synthetic EEG channel model.

use rand::RngCore;
use rand_distr::{Distribution, Normal};
use telemetry_api::{BandConfig, EegConfig};
use telemetry_spi::{ChannelModel, EegSample, Result, TelemetryError};

/// Synthetic EEG model: four amplitude-modulated band sinusoids.
///
/// Each band is `amplitude*sin(freq*t)*(1 + depth*sin(slow_freq*t))` with
/// `t = step / 10`. A single Gaussian draw per sample is added identically
/// to all four bands, so the bands share their noise term sample-for-sample.
/// Downstream scoring relies on that coupling staying intact.
#[derive(Debug, Clone)]
pub struct EegModel {
    config: EegConfig,
    noise: Normal<f64>,
}

impl EegModel {
    /// Create a model, validating the configuration.
    pub fn new(config: EegConfig) -> Result<Self> {
        let noise = Normal::new(0.0, config.noise_std).map_err(|e| {
            TelemetryError::InvalidParameter {
                name: "noise_std".to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { config, noise })
    }
}

fn band(config: &BandConfig, t: f64) -> f64 {
    config.amplitude * (config.freq * t).sin() * (1.0 + config.depth * (config.slow_freq * t).sin())
}

impl ChannelModel for EegModel {
    type Sample = EegSample;

    fn name(&self) -> &str {
        "eeg"
    }

    fn sample_at(&self, step: usize, timestamp_ms: i64, rng: &mut dyn RngCore) -> EegSample {
        let t = step as f64 / 10.0;
        // One draw, shared by all four bands.
        let noise = self.noise.sample(rng);

        EegSample::new(
            timestamp_ms,
            band(&self.config.alpha, t) + noise,
            band(&self.config.beta, t) + noise,
            band(&self.config.theta, t) + noise,
            band(&self.config.delta, t) + noise,
        )
    }
}
