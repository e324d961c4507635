//! Owner of the single shared [`VitalState`].
//!
//! All reads and writes go through one async mutex, so each simulation step
//! and each settings update runs as an indivisible read-modify-write even
//! when requests are handled on multiple threads.

use serde::Serialize;
use tokio::sync::Mutex;

use crate::classifier::classify;
use crate::settings::{self, SettingsAck, SettingsUpdate};
use crate::simulator::{PerturbationSource, VitalsSimulator};
use crate::vitals::VitalState;

/// Snapshot plus status, as returned by `GET /vitals`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalsReport {
    pub hr: i64,
    pub spo2: f64,
    pub temp: f64,
    pub status: String,
}

#[derive(Debug)]
struct Inner {
    state: VitalState,
    simulator: VitalsSimulator,
}

/// Serialized access to the vital state and its simulator.
///
/// Designed to be wrapped in `Arc` and shared through application state.
#[derive(Debug)]
pub struct VitalsMonitor {
    inner: Mutex<Inner>,
}

impl VitalsMonitor {
    pub fn new(state: VitalState, simulator: VitalsSimulator) -> Self {
        Self {
            inner: Mutex::new(Inner { state, simulator }),
        }
    }

    /// Default walk parameters driven by `source`.
    pub fn with_source(state: VitalState, source: impl PerturbationSource + 'static) -> Self {
        Self::new(state, VitalsSimulator::new(source))
    }

    /// Advance the walk one step and classify the rounded result.
    pub async fn read(&self) -> VitalsReport {
        let mut guard = self.inner.lock().await;
        let Inner { state, simulator } = &mut *guard;

        let reading = simulator.step(state);
        let status = classify(
            reading.hr as f64,
            reading.spo2,
            reading.temp,
            state.max_heart_rate_limit,
        );

        VitalsReport {
            hr: reading.hr,
            spo2: reading.spo2,
            temp: reading.temp,
            status: status.to_string(),
        }
    }

    /// Apply a settings update. Always acknowledges, even when nothing changed.
    pub async fn update_settings(&self, update: &SettingsUpdate) -> SettingsAck {
        let mut guard = self.inner.lock().await;
        let previous = guard.state.max_heart_rate_limit;

        match settings::apply(&mut guard.state, update) {
            Some(limit) => {
                tracing::info!(previous, limit, "Heart-rate ceiling updated");
            }
            None => {
                tracing::debug!(?update.max_hr, "Settings update without numeric max_hr ignored");
            }
        }

        SettingsAck::default()
    }

    /// Copy of the current unrounded state.
    pub async fn current_state(&self) -> VitalState {
        self.inner.lock().await.state
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::simulator::RngSource;
    use crate::vitals::{HEART_RATE_RANGE, SPO2_RANGE, TEMPERATURE_RANGE};

    /// Pushes every field up by its full amplitude.
    struct Rising;

    impl PerturbationSource for Rising {
        fn perturbation(&mut self, amplitude: f64) -> f64 {
            amplitude
        }
    }

    #[tokio::test]
    async fn read_reports_classified_snapshot() {
        let monitor = VitalsMonitor::with_source(VitalState::default(), Rising);
        let report = monitor.read().await;

        assert_eq!(report.hr, 74);
        assert_eq!(report.spo2, 98.2);
        assert_eq!(report.status, "Normal");
    }

    #[tokio::test]
    async fn lowered_ceiling_applies_on_next_read() {
        let monitor = VitalsMonitor::with_source(VitalState::default(), Rising);

        let ack = monitor.update_settings(&SettingsUpdate::with_max_hr(60.5)).await;
        assert_eq!(ack, SettingsAck::default());
        assert_eq!(monitor.current_state().await.max_heart_rate_limit, 60);

        let report = monitor.read().await;
        assert_eq!(report.status, "CRITICAL: Heart Rate above 60 BPM");
    }

    #[tokio::test]
    async fn empty_update_keeps_limit() {
        let monitor = VitalsMonitor::with_source(VitalState::default(), Rising);
        let ack = monitor.update_settings(&SettingsUpdate::default()).await;
        assert_eq!(ack.message, "Settings updated successfully");
        assert_eq!(monitor.current_state().await.max_heart_rate_limit, 150);
    }

    #[tokio::test]
    async fn sustained_rise_reaches_tachycardia_then_critical() {
        let monitor = VitalsMonitor::with_source(VitalState::with_limit(120), Rising);

        // 72 + 2n passes 100 after 15 steps and 120 after 25.
        let mut statuses = Vec::new();
        for _ in 0..30 {
            statuses.push(monitor.read().await.status);
        }
        assert_eq!(statuses[13], "Normal");
        assert_eq!(statuses[14], "Alert: Tachycardia (Resting)");
        assert_eq!(statuses[24], "CRITICAL: Heart Rate above 120 BPM");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_reads_keep_state_in_range() {
        let monitor = Arc::new(VitalsMonitor::with_source(
            VitalState::default(),
            RngSource::seeded(11),
        ));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let monitor = Arc::clone(&monitor);
            handles.push(tokio::spawn(async move {
                for _ in 0..250 {
                    monitor.read().await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let state = monitor.current_state().await;
        assert!(HEART_RATE_RANGE.contains(state.heart_rate));
        assert!(SPO2_RANGE.contains(state.spo2));
        assert!(TEMPERATURE_RANGE.contains(state.temperature));
    }
}
