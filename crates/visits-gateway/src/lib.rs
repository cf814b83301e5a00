//! visits gateway library entry.
//!
//! Wires config, identity, the counter store, and the HTTP handlers into a
//! router. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod identity;
pub mod ops;
pub mod router;
pub mod store;
