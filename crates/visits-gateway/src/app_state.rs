//! Shared application state.
//!
//! Built once at startup and read, never mutated, by every handler. Handlers
//! receive it through axum `State`, so tests can swap in a `MemoryStore`.

use std::sync::Arc;

use visits_core::error::{Result, VisitsError};

use crate::config::Config;
use crate::store::{self, CounterStore, RedisStore, StoreClient, STARTUP_DEADLINE};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pod: String,
    store: StoreClient,
}

impl AppState {
    pub fn new(pod: impl Into<String>, store: Arc<dyn CounterStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                pod: pod.into(),
                store: StoreClient::new(store),
            }),
        }
    }

    /// Connect to Redis and verify it answers a ping, all inside the startup
    /// deadline. Any failure here must abort the process.
    pub async fn connect(cfg: &Config, pod: String) -> Result<Self> {
        let redis = store::with_deadline(STARTUP_DEADLINE, async {
            let redis = RedisStore::connect(&cfg.redis_addr, cfg.redis_password.as_deref()).await?;
            redis.ping().await?;
            Ok::<_, VisitsError>(redis)
        })
        .await?;

        Ok(Self::new(pod, Arc::new(redis)))
    }

    pub fn pod(&self) -> &str {
        &self.inner.pod
    }

    pub fn store(&self) -> &StoreClient {
        &self.inner.store
    }
}
