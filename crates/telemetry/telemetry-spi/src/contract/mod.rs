//! Trait contracts for telemetry synthesis.

mod channel_model;

pub use channel_model::ChannelModel;
