use serde::{Deserialize, Serialize};

/// Store key holding the shared visit counter. Every instance pointed at the
/// same store increments this one key.
pub const COUNTER_KEY: &str = "visits_total";

/// Identity reported when the host name cannot be resolved.
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// Body of a successful `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitsResponse {
    pub visits: i64,
    pub pod: String,
}

impl VisitsResponse {
    pub fn new(visits: i64, pod: impl Into<String>) -> Self {
        Self { visits, pod: pod.into() }
    }
}
