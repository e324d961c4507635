use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Heart-rate ceiling currently applied by the classifier.
    pub max_hr_limit: i64,
}

/// GET /health -- returns service status without advancing the simulation.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let current = state.monitor.current_state().await;

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        max_hr_limit: current.max_heart_rate_limit,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
