//! API route handlers
//!
//! Each request runs the full pipeline on a fresh batch: synthesize, score,
//! attach context. Nothing is cached or shared between requests, so
//! concurrent calls cannot couple through detector state.

use anomaly::{attach_context, AnomalyError, OutlierScorer};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use telemetry::{
    EcgConfig, EcgModel, EcgSample, EegConfig, EegModel, EegSample, TelemetryError,
    WaveformSynthesizer,
};

/// Batch length served to the dashboard.
const DEFAULT_NUM_POINTS: usize = 100;

/// Error envelope returned to the dashboard on any pipeline failure.
#[derive(Debug)]
pub struct ApiError(String);

impl From<TelemetryError> for ApiError {
    fn from(err: TelemetryError) -> Self {
        ApiError(err.to_string())
    }
}

impl From<AnomalyError> for ApiError {
    fn from(err: AnomalyError) -> Self {
        ApiError(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "pipeline failure");
        let body = Json(serde_json::json!({
            "success": false,
            "error": self.0,
            "status": 500
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub async fn ecg() -> Result<Json<Vec<EcgSample>>, ApiError> {
    let model = EcgModel::new(EcgConfig::default())?;
    let mut batch = WaveformSynthesizer::new().generate(&model, DEFAULT_NUM_POINTS)?;

    let verdict = OutlierScorer::default().score(&mut batch, EcgSample::SCORING_CHANNELS)?;
    attach_context(&mut batch, EcgSample::SCORING_CHANNELS[0])?;

    tracing::debug!(anomalies = verdict.anomaly_count(), "scored ecg batch");
    Ok(Json(batch))
}

pub async fn eeg() -> Result<Json<Vec<EegSample>>, ApiError> {
    let model = EegModel::new(EegConfig::default())?;
    let mut batch = WaveformSynthesizer::new().generate(&model, DEFAULT_NUM_POINTS)?;

    let verdict = OutlierScorer::default().score(&mut batch, EegSample::SCORING_CHANNELS)?;
    attach_context(&mut batch, EegSample::SCORING_CHANNELS[0])?;

    tracing::debug!(anomalies = verdict.anomaly_count(), "scored eeg batch");
    Ok(Json(batch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ecg_handler_serves_scored_batch() {
        let Json(batch) = ecg().await.unwrap();

        assert_eq!(batch.len(), DEFAULT_NUM_POINTS);
        for pair in batch.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, 1000);
        }

        let json = serde_json::to_value(&batch).unwrap();
        assert!(json[0].get("isAnomaly").is_some());
    }

    #[tokio::test]
    async fn test_eeg_handler_serves_scored_batch() {
        let Json(batch) = eeg().await.unwrap();

        assert_eq!(batch.len(), DEFAULT_NUM_POINTS);
        let json = serde_json::to_value(&batch).unwrap();
        for key in ["alpha", "beta", "theta", "delta", "isAnomaly"] {
            assert!(json[0].get(key).is_some(), "missing wire field {key}");
        }
    }

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let response = ApiError("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
