//! Route definitions for the simulated vitals endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::vitals;
use crate::state::AppState;

/// ```text
/// GET  /                  -> index
/// GET  /vitals            -> get_vitals
/// POST /update_settings   -> update_settings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vitals::index))
        .route("/vitals", get(vitals::get_vitals))
        .route("/update_settings", post(vitals::update_settings))
}
