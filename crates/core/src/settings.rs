//! Operator settings updates for the shared vital state.
//!
//! Updates never fail: a missing or non-numeric `max_hr` leaves the state
//! untouched and the caller still acknowledges the request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::vitals::VitalState;

/// Fixed acknowledgement returned for every settings update.
pub const SETTINGS_UPDATED_MESSAGE: &str = "Settings updated successfully";

/// Request payload for a settings update. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    /// New heart-rate ceiling. Kept as a raw JSON value so any numeric
    /// representation is accepted and truncated.
    #[serde(default)]
    pub max_hr: Option<Value>,
}

impl SettingsUpdate {
    pub fn with_max_hr(value: impl Into<Value>) -> Self {
        Self {
            max_hr: Some(value.into()),
        }
    }
}

/// Response body for a settings update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsAck {
    pub message: &'static str,
}

impl Default for SettingsAck {
    fn default() -> Self {
        Self {
            message: SETTINGS_UPDATED_MESSAGE,
        }
    }
}

/// Convert a JSON number to a heart-rate limit, truncating toward zero.
///
/// Integers beyond `i64` and out-of-range floats saturate. Non-numeric
/// values yield `None`.
pub fn heart_rate_limit(value: &Value) -> Option<i64> {
    let number = value.as_number()?;
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    if number.as_u64().is_some() {
        return Some(i64::MAX);
    }
    // `as` truncates toward zero and saturates at the i64 bounds.
    number.as_f64().map(|float| float.trunc() as i64)
}

/// Apply `update` to `state`, returning the new limit if one was written.
pub fn apply(state: &mut VitalState, update: &SettingsUpdate) -> Option<i64> {
    let limit = update.max_hr.as_ref().and_then(heart_rate_limit)?;
    state.max_heart_rate_limit = limit;
    Some(limit)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
