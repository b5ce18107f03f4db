//! End-to-end tests for the telemetry crate
//!
//! Exercises waveform generation through the facade API only.

use telemetry::{
    EcgConfig, EcgModel, EegConfig, EegModel, TelemetryError, WaveformSynthesizer,
};

fn ecg_model() -> EcgModel {
    EcgModel::new(EcgConfig::default()).unwrap()
}

fn eeg_model() -> EegModel {
    EegModel::new(EegConfig::default()).unwrap()
}

#[test]
fn e2e_ecg_batch_shape() {
    let batch = WaveformSynthesizer::with_seed(42)
        .generate(&ecg_model(), 100)
        .unwrap();

    assert_eq!(batch.len(), 100);
    for pair in batch.windows(2) {
        assert!(pair[1].timestamp > pair[0].timestamp);
        assert_eq!(pair[1].timestamp - pair[0].timestamp, 1000);
    }
}

#[test]
fn e2e_ecg_values_stay_in_physiological_band() {
    let batch = WaveformSynthesizer::with_seed(42)
        .generate(&ecg_model(), 500)
        .unwrap();

    // P + QRS + T never exceeds ~1.9 in magnitude; noise adds a few sigma.
    for sample in &batch {
        assert!(sample.value.abs() < 2.5, "out of band: {}", sample.value);
        assert!(sample.value.is_finite());
    }
}

#[test]
fn e2e_ecg_r_peaks_dominate_their_beat() {
    let config = EcgConfig {
        noise_std: 0.0,
        ..EcgConfig::default()
    };
    let model = EcgModel::new(config).unwrap();
    let batch = WaveformSynthesizer::with_seed(0).generate(&model, 100).unwrap();

    for beat_start in (0..100).step_by(10) {
        let beat = &batch[beat_start..(beat_start + 10).min(100)];
        let peak = beat
            .iter()
            .map(|s| s.value)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(peak, beat[0].value, "R peak should lead beat {beat_start}");
    }
}

#[test]
fn e2e_eeg_batch_is_fresh_and_unlabeled() {
    let batch = WaveformSynthesizer::with_seed(7)
        .generate(&eeg_model(), 100)
        .unwrap();

    assert_eq!(batch.len(), 100);
    for sample in &batch {
        assert!(!sample.is_anomaly);
        assert!(sample.anomaly_context.is_none());
        for value in [sample.alpha, sample.beta, sample.theta, sample.delta] {
            assert!(value.is_finite());
        }
    }
}

#[test]
fn e2e_eeg_wire_format() {
    let batch = WaveformSynthesizer::with_seed(7)
        .generate(&eeg_model(), 3)
        .unwrap();
    let json = serde_json::to_value(&batch).unwrap();

    let first = &json[0];
    for key in ["timestamp", "alpha", "beta", "theta", "delta", "isAnomaly"] {
        assert!(first.get(key).is_some(), "missing wire field {key}");
    }
    assert!(first.get("anomalyContext").is_none());
    assert!(first.get("is_anomaly").is_none(), "snake_case leaked to wire");
}

#[test]
fn e2e_zero_points_rejected() {
    let err = WaveformSynthesizer::new()
        .generate(&ecg_model(), 0)
        .unwrap_err();
    assert!(matches!(err, TelemetryError::InsufficientData { .. }));
}

#[test]
fn e2e_seeded_generation_is_deterministic() {
    let a = WaveformSynthesizer::with_seed(99)
        .generate(&eeg_model(), 60)
        .unwrap();
    let b = WaveformSynthesizer::with_seed(99)
        .generate(&eeg_model(), 60)
        .unwrap();

    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.alpha, y.alpha);
        assert_eq!(x.beta, y.beta);
        assert_eq!(x.theta, y.theta);
        assert_eq!(x.delta, y.delta);
    }
}
