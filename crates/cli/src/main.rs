//! # vitalstream
//!
//! Command-line interface for the vitalstream telemetry pipeline. Generates
//! a scored batch and writes it as the same JSON the HTTP API serves.

use anomaly::{attach_context, ChannelRecord, IsolationForestConfig, OutlierScorer};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use telemetry::{
    ChannelModel, EcgConfig, EcgModel, EcgSample, EegConfig, EegModel, EegSample,
    WaveformSynthesizer,
};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "vitalstream")]
#[command(about = "Synthetic telemetry generation and anomaly scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and score a synthetic ECG batch
    Ecg {
        #[command(flatten)]
        options: BatchOptions,
    },

    /// Generate and score a synthetic EEG batch
    Eeg {
        #[command(flatten)]
        options: BatchOptions,
    },
}

#[derive(clap::Args)]
struct BatchOptions {
    /// Number of samples to generate
    #[arg(short, long, default_value_t = 100)]
    points: usize,

    /// Seed for synthesis and scoring (omit for fresh randomness)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ecg { options } => {
            let model = EcgModel::new(EcgConfig::default()).map_err(|e| e.to_string());
            model.and_then(|m| run_batch(&m, EcgSample::SCORING_CHANNELS, &options))
        }
        Commands::Eeg { options } => {
            let model = EegModel::new(EegConfig::default()).map_err(|e| e.to_string());
            model.and_then(|m| run_batch(&m, EegSample::SCORING_CHANNELS, &options))
        }
    };

    if let Err(message) = result {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn run_batch<M>(model: &M, channels: &[&str], options: &BatchOptions) -> CliResult<()>
where
    M: ChannelModel,
    M::Sample: ChannelRecord + Serialize,
{
    let synthesizer = match options.seed {
        Some(seed) => WaveformSynthesizer::with_seed(seed),
        None => WaveformSynthesizer::new(),
    };
    let mut batch = synthesizer
        .generate(model, options.points)
        .map_err(|e| e.to_string())?;

    let config = match options.seed {
        Some(seed) => IsolationForestConfig::default().with_seed(seed),
        None => IsolationForestConfig::default(),
    };
    let verdict = OutlierScorer::new(config)
        .score(&mut batch, channels)
        .map_err(|e| e.to_string())?;
    attach_context(&mut batch, channels[0]).map_err(|e| e.to_string())?;

    let json = if options.pretty {
        serde_json::to_string_pretty(&batch)
    } else {
        serde_json::to_string(&batch)
    }
    .map_err(|e| e.to_string())?;

    match &options.output {
        Some(path) => {
            fs::write(path, json).map_err(|e| e.to_string())?;
            eprintln!(
                "{}: wrote {} samples ({} anomalous) to {}",
                model.name(),
                batch.len(),
                verdict.anomaly_count(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
