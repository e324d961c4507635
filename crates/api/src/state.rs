use std::sync::Arc;

use vitalsim_core::monitor::VitalsMonitor;
use vitalsim_core::simulator::RngSource;
use vitalsim_core::vitals::VitalState;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; inner data is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The single vital-state instance and its simulator.
    pub monitor: Arc<VitalsMonitor>,
}

impl AppState {
    /// Build state from configuration: startup defaults, the configured
    /// ceiling, and a seeded or entropy-backed random source.
    pub fn from_config(config: ServerConfig) -> Self {
        let state = VitalState::with_limit(config.initial_max_hr);
        let source = match config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };

        Self::new(config, VitalsMonitor::with_source(state, source))
    }

    pub fn new(config: ServerConfig, monitor: VitalsMonitor) -> Self {
        Self {
            config: Arc::new(config),
            monitor: Arc::new(monitor),
        }
    }
}
