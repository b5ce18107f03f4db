//! Synthetic ECG channel model.

use std::f64::consts::PI;

use rand::RngCore;
use rand_distr::{Distribution, Normal};
use telemetry_api::EcgConfig;
use telemetry_spi::{ChannelModel, EcgSample, Result, TelemetryError};

/// Synthetic ECG model: P + QRS + T plus Gaussian noise.
///
/// With `t = step / 10`, the composite value is
/// `p_amplitude*sin(2*pi*t) + qrs(step) + t_amplitude*sin(1.5*pi*t) + noise`,
/// where `qrs` is the three-point spike pattern keyed on `step % beat_period`.
#[derive(Debug, Clone)]
pub struct EcgModel {
    config: EcgConfig,
    noise: Normal<f64>,
}

impl EcgModel {
    /// Create a model, validating the configuration.
    pub fn new(config: EcgConfig) -> Result<Self> {
        if config.beat_period < 2 {
            return Err(TelemetryError::InvalidParameter {
                name: "beat_period".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        let noise = Normal::new(0.0, config.noise_std).map_err(|e| {
            TelemetryError::InvalidParameter {
                name: "noise_std".to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { config, noise })
    }

    fn qrs(&self, step: usize) -> f64 {
        let phase = step % self.config.beat_period;
        if phase == 0 {
            self.config.r_spike
        } else if phase == 1 {
            self.config.s_dip
        } else if phase == self.config.beat_period - 1 {
            self.config.q_dip
        } else {
            0.0
        }
    }
}

impl ChannelModel for EcgModel {
    type Sample = EcgSample;

    fn name(&self) -> &str {
        "ecg"
    }

    fn sample_at(&self, step: usize, timestamp_ms: i64, rng: &mut dyn RngCore) -> EcgSample {
        let t = step as f64 / 10.0;
        let p_wave = self.config.p_amplitude * (2.0 * PI * t).sin();
        let t_wave = self.config.t_amplitude * (1.5 * PI * t).sin();
        let noise = self.noise.sample(rng);

        EcgSample::new(timestamp_ms, p_wave + self.qrs(step) + t_wave + noise)
    }
}
