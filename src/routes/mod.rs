mod health;
mod home;
mod predict;

use crate::server::SharedState;
use axum::{
    routing::{get, post},
    Router,
};

pub use predict::{PredictRequest, PredictResponse};

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health::healthcheck))
        .route("/predict", post(predict::predict))
}
