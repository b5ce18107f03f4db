//! Outlier scoring implementations.
//!
//! The pipeline here is transductive by design: every `score` call fits a
//! fresh isolation forest on the batch it is given and labels that same
//! batch ("live batch scoring"). Nothing is retained between invocations.

mod context;
mod features;
mod forest;
mod scorer;

#[cfg(test)]
mod testutil;

pub use context::attach_context;
pub use features::build_features;
pub use forest::IsolationForest;
pub use scorer::OutlierScorer;
