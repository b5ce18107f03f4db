//! Outlier scoring error types.

use thiserror::Error;

/// Outlier scoring errors.
#[derive(Debug, Clone, Error)]
pub enum AnomalyError {
    /// Batch too small to fit the ensemble.
    #[error("Insufficient data: required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },

    /// A requested channel is missing from a sample.
    #[error("Feature extraction failed: channel '{channel}' missing from sample")]
    FeatureExtraction { channel: String },

    /// Numeric failure inside the outlier model.
    #[error("Detector fit failed: {0}")]
    DetectorFit(String),
}

/// Result type for outlier scoring operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = AnomalyError::InsufficientData { required: 2, got: 1 };
        assert_eq!(error.to_string(), "Insufficient data: required 2, got 1");
    }

    #[test]
    fn test_feature_extraction_display() {
        let error = AnomalyError::FeatureExtraction {
            channel: "gamma".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Feature extraction failed: channel 'gamma' missing from sample"
        );
    }

    #[test]
    fn test_detector_fit_display() {
        let error = AnomalyError::DetectorFit("non-finite value in row 3".to_string());
        assert_eq!(
            error.to_string(),
            "Detector fit failed: non-finite value in row 3"
        );
    }

    #[test]
    fn test_error_debug_format() {
        let error = AnomalyError::InsufficientData { required: 2, got: 0 };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InsufficientData"));
        assert!(debug_str.contains("2"));
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<()> = Err(AnomalyError::DetectorFit("overflow".to_string()));
        assert!(matches!(result.unwrap_err(), AnomalyError::DetectorFit(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnomalyError>();
    }
}
