use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong while answering a predict request.
///
/// Clients only ever see the single `{"error": "<message>"}` channel; the
/// variants exist so logs can tell a bad input shape from a broken session.
#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("No landmarks data provided")]
    MissingLandmarks,

    #[error("Input shape mismatch: expected {expected} features, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Model returned unknown label index: {0}")]
    UnknownLabel(i64),
}

impl IntoResponse for PredictionError {
    fn into_response(self) -> Response {
        let status = match self {
            PredictionError::MissingLandmarks => StatusCode::BAD_REQUEST,
            PredictionError::ShapeMismatch { .. }
            | PredictionError::Inference(_)
            | PredictionError::UnknownLabel(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_landmarks_message_is_stable() {
        let error = PredictionError::MissingLandmarks;
        assert_eq!(error.to_string(), "No landmarks data provided");
    }

    #[test]
    fn shape_mismatch_message_names_both_lengths() {
        let error = PredictionError::ShapeMismatch {
            expected: 42,
            got: 3,
        };
        assert_eq!(
            error.to_string(),
            "Input shape mismatch: expected 42 features, got 3"
        );
    }

    #[test]
    fn missing_landmarks_maps_to_bad_request() {
        let response = PredictionError::MissingLandmarks.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn processing_failures_map_to_internal_error() {
        let shape = PredictionError::ShapeMismatch {
            expected: 42,
            got: 7,
        };
        assert_eq!(
            shape.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let inference = PredictionError::Inference("session gone".to_string());
        assert_eq!(
            inference.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let label = PredictionError::UnknownLabel(99);
        assert_eq!(
            label.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
