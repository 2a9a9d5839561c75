//! # server
//!
//! REST API server for tubercast potato price forecasts.
//!
//! The binary in `main.rs` wires configuration, model loading, and the HTTP
//! stack together; the library half exposes the router and configuration so
//! integration tests can drive the full request path in process.

pub mod config;
pub mod routes;
