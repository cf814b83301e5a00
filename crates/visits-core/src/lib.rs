//! visits core: transport-agnostic contracts shared by the gateway and tests.
//!
//! This crate defines the response payload, the shared counter key, and the
//! error surface. It carries no runtime or store dependencies.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;

/// Shared result type.
pub use error::{Result, VisitsError};
pub use model::{VisitsResponse, COUNTER_KEY, UNKNOWN_IDENTITY};
