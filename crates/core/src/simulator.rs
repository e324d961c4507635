//! Bounded random-walk generator for simulated vital signs.
//!
//! Each [`VitalsSimulator::step`] adds a symmetric random perturbation to
//! every physiological field, clamps it back into its valid range, and
//! returns the rounded snapshot. The random source is injectable through
//! [`PerturbationSource`] so tests can drive the walk deterministically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::vitals::{
    VitalRange, VitalState, VitalsReading, HEART_RATE_RANGE, SPO2_RANGE, TEMPERATURE_RANGE,
};

/// Maximum heart-rate change per step (BPM).
pub const HEART_RATE_STEP: f64 = 2.0;
/// Maximum SpO2 change per step (percentage points).
pub const SPO2_STEP: f64 = 0.2;
/// Maximum temperature change per step (°C).
pub const TEMPERATURE_STEP: f64 = 0.05;

/// Source of random perturbations for the walk.
pub trait PerturbationSource: Send {
    /// Draw a value in `[-amplitude, +amplitude]`.
    fn perturbation(&mut self, amplitude: f64) -> f64;
}

/// Uniform perturbations drawn from a [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible sequence for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> PerturbationSource for RngSource<R> {
    fn perturbation(&mut self, amplitude: f64) -> f64 {
        if amplitude <= 0.0 {
            return 0.0;
        }
        self.rng.random_range(-amplitude..=amplitude)
    }
}

/// Step size and valid range for one field of the walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    pub amplitude: f64,
    pub range: VitalRange,
}

impl WalkParams {
    fn advance(&self, value: f64, source: &mut dyn PerturbationSource) -> f64 {
        self.range.clamp(value + source.perturbation(self.amplitude))
    }
}

/// Walk parameters for all three physiological fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkConfig {
    pub heart_rate: WalkParams,
    pub spo2: WalkParams,
    pub temperature: WalkParams,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            heart_rate: WalkParams {
                amplitude: HEART_RATE_STEP,
                range: HEART_RATE_RANGE,
            },
            spo2: WalkParams {
                amplitude: SPO2_STEP,
                range: SPO2_RANGE,
            },
            temperature: WalkParams {
                amplitude: TEMPERATURE_STEP,
                range: TEMPERATURE_RANGE,
            },
        }
    }
}

/// Advances a [`VitalState`] by one bounded random-walk step per call.
pub struct VitalsSimulator {
    source: Box<dyn PerturbationSource>,
    config: WalkConfig,
}

impl VitalsSimulator {
    /// Simulator with the default walk parameters.
    pub fn new(source: impl PerturbationSource + 'static) -> Self {
        Self::with_config(source, WalkConfig::default())
    }

    pub fn with_config(source: impl PerturbationSource + 'static, config: WalkConfig) -> Self {
        Self {
            source: Box::new(source),
            config,
        }
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Perturb and clamp each field in place, then return the rounded snapshot.
    ///
    /// Draw order is heart rate, SpO2, temperature. The unrounded values stay
    /// in `state` so drift accumulates at full precision.
    pub fn step(&mut self, state: &mut VitalState) -> VitalsReading {
        let source = self.source.as_mut();
        state.heart_rate = self.config.heart_rate.advance(state.heart_rate, source);
        state.spo2 = self.config.spo2.advance(state.spo2, source);
        state.temperature = self.config.temperature.advance(state.temperature, source);

        tracing::trace!(
            heart_rate = state.heart_rate,
            spo2 = state.spo2,
            temperature = state.temperature,
            "Advanced vitals random walk"
        );

        state.snapshot()
    }
}

impl std::fmt::Debug for VitalsSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VitalsSimulator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
