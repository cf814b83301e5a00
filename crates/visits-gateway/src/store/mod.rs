//! Store seam: the narrow counter capability the handlers depend on.
//!
//! `CounterStore` exposes only `incr` and `ping`. `StoreClient` is the shared
//! handle handed to handlers; it bounds every call with a deadline and makes
//! exactly one attempt.

pub mod memory;
pub mod redis_store;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use visits_core::error::{Result, VisitsError};

pub use self::memory::MemoryStore;
pub use self::redis_store::RedisStore;

/// Deadline on the `GET /` increment.
pub const INCR_DEADLINE: Duration = Duration::from_secs(2);
/// Deadline on the `/health` ping.
pub const HEALTH_DEADLINE: Duration = Duration::from_secs(1);
/// Deadline on the boot-time connect + ping.
pub const STARTUP_DEADLINE: Duration = Duration::from_secs(3);

/// Atomic counter store. Implementations must be safe for concurrent use
/// without external locking.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Increment `key` by one and return the new value. A missing key starts at 0.
    async fn incr(&self, key: &str) -> Result<i64>;
    /// Check the store is reachable.
    async fn ping(&self) -> Result<()>;
}

/// Shared, cloneable store handle with per-call deadlines.
#[derive(Clone)]
pub struct StoreClient {
    inner: Arc<dyn CounterStore>,
}

impl StoreClient {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self { inner: store }
    }

    pub async fn incr(&self, key: &str, deadline: Duration) -> Result<i64> {
        with_deadline(deadline, self.inner.incr(key)).await
    }

    pub async fn ping(&self, deadline: Duration) -> Result<()> {
        with_deadline(deadline, self.inner.ping()).await
    }
}

/// Run `fut` under `deadline`. On expiry the future is dropped and the call
/// reports `VisitsError::Timeout`.
pub async fn with_deadline<T, F>(deadline: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(res) => res,
        Err(_) => Err(VisitsError::Timeout),
    }
}
