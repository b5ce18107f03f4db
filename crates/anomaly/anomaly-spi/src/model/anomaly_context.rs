//! Neighbor context for anomalous records.

use serde::{Deserialize, Serialize};

/// Local context attached to an interior anomalous record.
///
/// `previous` and `next` are snapshots of the immediate neighbors taken at
/// attach time. `deviation` is the record's distance from the mean of its
/// 3-point window, normalized by the window's standard deviation (0 when the
/// window has zero variance).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyContext<R> {
    /// Snapshot of the preceding record.
    pub previous: R,
    /// Snapshot of the following record.
    pub next: R,
    /// Normalized local deviation, always `>= 0`.
    pub deviation: f64,
}

impl<R> AnomalyContext<R> {
    /// Create a new context.
    pub fn new(previous: R, next: R, deviation: f64) -> Self {
        Self {
            previous,
            next,
            deviation,
        }
    }
}
