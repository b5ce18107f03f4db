//! Telemetry synthesis error types.

use thiserror::Error;

/// Telemetry synthesis errors.
#[derive(Debug, Clone, Error)]
pub enum TelemetryError {
    /// Batch length too small to generate.
    #[error("Insufficient data: required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },

    /// A model parameter is out of range.
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The system clock is unusable for timestamping.
    #[error("Clock error: {0}")]
    Clock(String),
}

/// Result type for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;
