//! Basic example demonstrating live batch scoring
//!
//! Run with: cargo run --example basic -p anomaly

use anomaly::{attach_context, OutlierScorer};
use telemetry::{EcgConfig, EcgModel, EcgSample, WaveformSynthesizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== anomaly Basic Example ===\n");

    // Synthesize a batch and plant one obvious outlier.
    let model = EcgModel::new(EcgConfig::default())?;
    let mut batch = WaveformSynthesizer::with_seed(42).generate(&model, 60)?;
    batch[30].value = 25.0;

    // Score and annotate.
    let verdict = OutlierScorer::default().score(&mut batch, EcgSample::SCORING_CHANNELS)?;
    attach_context(&mut batch, "value")?;

    println!("threshold: {:.4}", verdict.threshold);
    println!("flagged {} of {} samples:\n", verdict.anomaly_count(), batch.len());

    for i in verdict.anomaly_indices() {
        let sample = &batch[i];
        match &sample.anomaly_context {
            Some(context) => println!(
                "  [{i:>2}] value={:>8.4}  deviation={:.4}  neighbors=({:.4}, {:.4})",
                sample.value, context.deviation, context.previous.value, context.next.value
            ),
            None => println!("  [{i:>2}] value={:>8.4}  (boundary, no context)", sample.value),
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
