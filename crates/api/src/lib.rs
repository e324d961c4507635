//! Vitals simulator API server library.
//!
//! Exposes config, state, handlers, routes, and the shared router builder so
//! integration tests and the binary entrypoint use the same wiring.

pub mod config;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
