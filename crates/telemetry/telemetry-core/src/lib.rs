//! Waveform synthesis implementations.

mod ecg;
mod eeg;
mod synthesizer;

pub use ecg::EcgModel;
pub use eeg::EegModel;
pub use synthesizer::WaveformSynthesizer;
