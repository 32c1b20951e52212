use crate::{error::PredictionError, labels, server::SharedState};
use axum::{extract::State, Json};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 21 hand-landmark points, two coordinates each.
pub const NUM_FEATURES: usize = 42;

#[derive(Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub landmarks: Vec<f32>,
}

#[derive(Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: String,
}

#[instrument(skip(state, payload))]
pub async fn predict(
    State(state): State<SharedState>,
    Json(payload): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, PredictionError> {
    if payload.landmarks.is_empty() {
        return Err(PredictionError::MissingLandmarks);
    }

    tracing::debug!(landmarks = ?payload.landmarks, "Incoming landmark data");

    let got = payload.landmarks.len();
    let input =
        Array2::from_shape_vec((1, NUM_FEATURES), payload.landmarks).map_err(|_| {
            PredictionError::ShapeMismatch {
                expected: NUM_FEATURES,
                got,
            }
        })?;

    let class_index = state.model_service.predict(input)?;
    tracing::debug!(class_index, "Model prediction");

    let predicted_character =
        labels::label_for(class_index).ok_or(PredictionError::UnknownLabel(class_index))?;
    tracing::debug!(%predicted_character, "Predicted character");

    Ok(Json(PredictResponse {
        prediction: predicted_character.to_string(),
    }))
}
