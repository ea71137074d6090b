//! Liveness endpoint
//!
//! The listener only binds after the dataset has loaded, so a response here
//! also means the catalog is in memory. The catalog sizes are reported so a
//! monitor can spot an empty or truncated dataset file.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    pub manufacturers: usize,
    pub car_models: usize,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        module: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        manufacturers: state.dataset.manufacturers().len(),
        car_models: state.dataset.car_models().len(),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
