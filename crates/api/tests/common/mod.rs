#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use vitalsim_api::config::ServerConfig;
use vitalsim_api::router::build_app_router;
use vitalsim_api::state::AppState;
use vitalsim_core::monitor::VitalsMonitor;
use vitalsim_core::simulator::{PerturbationSource, RngSource};
use vitalsim_core::vitals::VitalState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Restricts CORS to `http://localhost:5173` so origin handling is observable.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        ..ServerConfig::default()
    }
}

/// Perturbation source that never moves the walk.
pub struct Still;

impl PerturbationSource for Still {
    fn perturbation(&mut self, _amplitude: f64) -> f64 {
        0.0
    }
}

/// Build the full application router around the given monitor, using the
/// same middleware stack as production.
pub fn build_app_with(config: ServerConfig, monitor: VitalsMonitor) -> Router {
    let state = AppState::new(config.clone(), monitor);
    build_app_router(state, &config).unwrap()
}

/// App whose vitals stay at `state` on every read.
pub fn build_still_app(state: VitalState) -> Router {
    build_app_with(test_config(), VitalsMonitor::with_source(state, Still))
}

/// App with a seeded random walk from startup defaults.
pub fn build_seeded_app(seed: u64) -> Router {
    build_app_with(
        test_config(),
        VitalsMonitor::with_source(VitalState::default(), RngSource::seeded(seed)),
    )
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
