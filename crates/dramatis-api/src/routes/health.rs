//! Liveness endpoint for the narrative player server.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Body returned by `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Name of the serving binary.
    pub service: String,
    /// Always `"ok"` when the server is able to respond at all.
    pub status: String,
    /// Crate version the server was built from.
    pub version: String,
}

/// GET /health — reports that the player is up and which build is running.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: env!("CARGO_PKG_NAME").to_string(),
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Router exposing the liveness endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
