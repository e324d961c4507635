//! Vital-sign state, valid ranges, and the rounded snapshot reported to clients.

use serde::Serialize;

/// Default resting heart rate at startup (BPM).
pub const DEFAULT_HEART_RATE: f64 = 72.0;
/// Default oxygen saturation at startup (percent).
pub const DEFAULT_SPO2: f64 = 98.0;
/// Default body temperature at startup (°C).
pub const DEFAULT_TEMPERATURE: f64 = 36.6;
/// Default heart-rate ceiling used by the classifier (BPM).
pub const DEFAULT_MAX_HEART_RATE_LIMIT: i64 = 150;

/// Valid heart-rate range in BPM.
pub const HEART_RATE_RANGE: VitalRange = VitalRange::new(60.0, 160.0);
/// Valid SpO2 range in percent.
pub const SPO2_RANGE: VitalRange = VitalRange::new(94.0, 100.0);
/// Valid body-temperature range in °C.
pub const TEMPERATURE_RANGE: VitalRange = VitalRange::new(36.1, 39.0);

/// Inclusive `[min, max]` interval a vital sign is clamped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalRange {
    pub min: f64,
    pub max: f64,
}

impl VitalRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Replace an out-of-range value with the nearest bound.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// The authoritative, unrounded vital-sign state.
///
/// Exactly one instance lives for the whole process (see
/// [`crate::monitor::VitalsMonitor`]). Simulation steps drift on the
/// unrounded values; rounding only happens in [`VitalState::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalState {
    pub heart_rate: f64,
    pub spo2: f64,
    pub temperature: f64,
    /// Operator-configurable ceiling. No bounds are enforced.
    pub max_heart_rate_limit: i64,
}

impl Default for VitalState {
    fn default() -> Self {
        Self {
            heart_rate: DEFAULT_HEART_RATE,
            spo2: DEFAULT_SPO2,
            temperature: DEFAULT_TEMPERATURE,
            max_heart_rate_limit: DEFAULT_MAX_HEART_RATE_LIMIT,
        }
    }
}

impl VitalState {
    /// Default physiological values with a custom heart-rate ceiling.
    pub fn with_limit(max_heart_rate_limit: i64) -> Self {
        Self {
            max_heart_rate_limit,
            ..Self::default()
        }
    }

    /// Rounded view of the current values. Does not modify the state.
    pub fn snapshot(&self) -> VitalsReading {
        VitalsReading {
            hr: self.heart_rate.round() as i64,
            spo2: round_to_tenth(self.spo2),
            temp: round_to_tenth(self.temperature),
        }
    }
}

/// Rounded, externally reported vital signs at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VitalsReading {
    /// Heart rate rounded to the nearest whole BPM.
    pub hr: i64,
    /// SpO2 rounded to one decimal place.
    pub spo2: f64,
    /// Temperature rounded to one decimal place.
    pub temp: f64,
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
