//! Top-level facade crate for visits.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use visits_core::*;
}

pub mod gateway {
    pub use visits_gateway::*;
}
