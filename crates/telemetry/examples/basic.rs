//! Basic example demonstrating waveform synthesis
//!
//! Run with: cargo run --example basic -p telemetry

use telemetry::{EcgConfig, EcgModel, EegConfig, EegModel, WaveformSynthesizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== telemetry Basic Examples ===\n");

    let synthesizer = WaveformSynthesizer::with_seed(42);

    // 1. ECG batch
    println!("1. ECG (20 points)");
    let ecg = synthesizer.generate(&EcgModel::new(EcgConfig::default())?, 20)?;
    for sample in ecg.iter().take(12) {
        println!("   {} {:>8.4}", sample.timestamp, sample.value);
    }

    // 2. EEG batch
    println!("\n2. EEG (5 points)");
    let eeg = synthesizer.generate(&EegModel::new(EegConfig::default())?, 5)?;
    for sample in &eeg {
        println!(
            "   {} alpha={:>7.4} beta={:>7.4} theta={:>7.4} delta={:>7.4}",
            sample.timestamp, sample.alpha, sample.beta, sample.theta, sample.delta
        );
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
