//! Handlers for the simulated vitals endpoints.
//!
//! Includes:
//! - `GET /` service banner.
//! - `GET /vitals` random-walk step plus status classification.
//! - `POST /update_settings` heart-rate ceiling update.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use vitalsim_core::monitor::VitalsReport;
use vitalsim_core::settings::{SettingsAck, SettingsUpdate};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Endpoint directory advertised by the service banner.
#[derive(Debug, Serialize)]
pub struct EndpointIndex {
    pub data: &'static str,
    pub docs: &'static str,
}

/// `GET /` response payload.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: EndpointIndex,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /
///
/// Confirms the service is reachable and lists its data endpoint.
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Health Monitor API is Online",
        endpoints: EndpointIndex {
            data: "/vitals",
            docs: "/docs",
        },
    })
}

/// GET /vitals
///
/// Advances the random walk by one step and returns the rounded reading with
/// its status. Every call changes the shared state.
pub async fn get_vitals(State(state): State<AppState>) -> Json<VitalsReport> {
    let report = state.monitor.read().await;
    tracing::debug!(
        hr = report.hr,
        spo2 = report.spo2,
        temp = report.temp,
        status = %report.status,
        "Served vitals reading"
    );
    Json(report)
}

/// POST /update_settings
///
/// Accepts `{"max_hr": <number>}`. The body is parsed leniently: an empty
/// body, malformed JSON, or a missing or non-numeric `max_hr` leaves the
/// state unchanged and is still acknowledged with `200 OK`.
pub async fn update_settings(State(state): State<AppState>, body: Bytes) -> Json<SettingsAck> {
    let update = parse_settings(&body);
    Json(state.monitor.update_settings(&update).await)
}

fn parse_settings(body: &[u8]) -> SettingsUpdate {
    if body.iter().all(u8::is_ascii_whitespace) {
        return SettingsUpdate::default();
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(object @ Value::Object(_)) => serde_json::from_value(object).unwrap_or_default(),
        Ok(other) => {
            tracing::warn!(payload = %other, "Ignoring non-object settings payload");
            SettingsUpdate::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "Ignoring malformed settings payload");
            SettingsUpdate::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_and_blank_bodies_are_no_ops() {
        assert!(parse_settings(b"").max_hr.is_none());
        assert!(parse_settings(b" \n").max_hr.is_none());
    }

    #[test]
    fn malformed_bodies_are_no_ops() {
        assert!(parse_settings(b"{max_hr: 1").max_hr.is_none());
        assert!(parse_settings(b"[120]").max_hr.is_none());
        assert!(parse_settings(b"120").max_hr.is_none());
    }

    #[test]
    fn max_hr_is_extracted() {
        assert_eq!(parse_settings(br#"{"max_hr": 120.9}"#).max_hr, Some(json!(120.9)));
    }
}
