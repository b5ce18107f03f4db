mod telemetry_error;

pub use telemetry_error::{Result, TelemetryError};
