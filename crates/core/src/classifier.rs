//! Threshold cascade that turns a vitals snapshot into a status message.
//!
//! Pure logic. Conditions are checked in a fixed priority order and the first
//! match wins, so a heart rate above both the configurable ceiling and the
//! fixed tachycardia threshold always reports [`VitalStatus::Critical`].

use std::fmt;

/// Resting heart rate above which tachycardia is reported (BPM).
pub const TACHYCARDIA_BPM: f64 = 100.0;
/// Oxygen saturation below which a low-oxygen warning is reported (percent).
pub const LOW_SPO2_PERCENT: f64 = 95.0;
/// Body temperature above which a fever warning is reported (°C).
pub const FEVER_CELSIUS: f64 = 37.8;

/// Outcome of [`classify`], rendered to its client-facing text by `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalStatus {
    /// Heart rate exceeded the operator-configured ceiling.
    Critical { limit: i64 },
    Tachycardia,
    LowOxygen,
    Fever,
    Normal,
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VitalStatus::Critical { limit } => {
                write!(f, "CRITICAL: Heart Rate above {limit} BPM")
            }
            VitalStatus::Tachycardia => f.write_str("Alert: Tachycardia (Resting)"),
            VitalStatus::LowOxygen => f.write_str("Warning: Low Oxygen Saturation"),
            VitalStatus::Fever => f.write_str("Warning: Fever detected"),
            VitalStatus::Normal => f.write_str("Normal"),
        }
    }
}

/// Return the highest-priority status matching the given vitals.
pub fn classify(
    heart_rate: f64,
    spo2: f64,
    temperature: f64,
    max_heart_rate_limit: i64,
) -> VitalStatus {
    if heart_rate > max_heart_rate_limit as f64 {
        VitalStatus::Critical {
            limit: max_heart_rate_limit,
        }
    } else if heart_rate > TACHYCARDIA_BPM {
        VitalStatus::Tachycardia
    } else if spo2 < LOW_SPO2_PERCENT {
        VitalStatus::LowOxygen
    } else if temperature > FEVER_CELSIUS {
        VitalStatus::Fever
    } else {
        VitalStatus::Normal
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
