//! Outlier ensemble trait definition.

use crate::error::Result;
use crate::model::OutlierVerdict;

/// An unsupervised outlier ensemble fitted and evaluated on a single batch.
///
/// Implementations perform live batch scoring: `fit_predict` learns from the
/// given rows and labels those same rows, retaining no state for future
/// batches. Callers construct a fresh instance per invocation.
pub trait OutlierEnsemble: Send + Sync {
    /// Fit on the batch and label each row. Outliers come back `true`.
    fn fit_predict(&mut self, rows: &[Vec<f64>]) -> Result<OutlierVerdict>;
}
