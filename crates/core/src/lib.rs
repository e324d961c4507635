//! Domain logic for the vitals simulator.
//!
//! Pure logic with no HTTP concerns: the shared [`vitals::VitalState`], the
//! random-walk [`simulator::VitalsSimulator`], the status
//! [`classifier::classify`] cascade, settings updates, and the
//! [`monitor::VitalsMonitor`] that serializes access to the single state
//! instance.

pub mod classifier;
pub mod monitor;
pub mod settings;
pub mod simulator;
pub mod vitals;
