//! Batch waveform synthesizer.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;
use telemetry_spi::{ChannelModel, Result, TelemetryError};

/// Produces ordered batches of synthetic samples for a channel model.
///
/// Timestamps are anchored to the system clock at call time: sample `i` of an
/// `n`-point batch is stamped `now - (n - 1 - i)` seconds, so the batch ends
/// at "now" and advances in exact 1-second ticks. Each call draws fresh
/// randomness unless a seed is set, in which case output is reproducible.
#[derive(Debug, Clone, Default)]
pub struct WaveformSynthesizer {
    seed: Option<u64>,
}

impl WaveformSynthesizer {
    /// Create an entropy-seeded synthesizer.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Create a synthesizer with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Generate `num_points` samples from the model, oldest first.
    pub fn generate<M: ChannelModel>(
        &self,
        model: &M,
        num_points: usize,
    ) -> Result<Vec<M::Sample>> {
        if num_points == 0 {
            return Err(TelemetryError::InsufficientData {
                required: 1,
                got: 0,
            });
        }

        let now_ms = epoch_millis()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok((0..num_points)
            .map(|i| {
                let timestamp_ms = now_ms - ((num_points - 1 - i) as i64) * 1000;
                model.sample_at(i, timestamp_ms, &mut rng)
            })
            .collect())
    }
}

fn epoch_millis() -> Result<i64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .map_err(|e| TelemetryError::Clock(e.to_string()))
}
