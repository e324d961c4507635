pub mod health;
pub mod vitals;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// All routes live at the root so the dashboard can poll them directly.
///
/// ```text
/// /                    service banner
/// /health              liveness and version
/// /vitals              step the random walk and classify (GET)
/// /update_settings     set the heart-rate ceiling (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(vitals::router())
}
