//! In-process counter store with fault injection, for tests.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;

use visits_core::error::{Result, VisitsError};

use super::CounterStore;

pub struct MemoryStore {
    counters: DashMap<String, i64>,
    available: AtomicBool,
    delay_ms: AtomicU64,
    incr_calls: AtomicU64,
    ping_calls: AtomicU64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
            available: AtomicBool::new(true),
            delay_ms: AtomicU64::new(0),
            incr_calls: AtomicU64::new(0),
            ping_calls: AtomicU64::new(0),
        }
    }

    /// Simulate an outage (`false`) or recovery (`true`).
    pub fn set_available(&self, up: bool) {
        self.available.store(up, Ordering::SeqCst);
    }

    /// Latency added before every command.
    pub fn set_delay(&self, delay: Duration) {
        let ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.delay_ms.store(ms, Ordering::SeqCst);
    }

    /// Current value of `key` without touching call counters.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.counters.get(key).map(|v| *v)
    }

    pub fn incr_calls(&self) -> u64 {
        self.incr_calls.load(Ordering::SeqCst)
    }

    pub fn ping_calls(&self) -> u64 {
        self.ping_calls.load(Ordering::SeqCst)
    }

    async fn round_trip(&self) -> Result<()> {
        let ms = self.delay_ms.load(Ordering::SeqCst);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(VisitsError::Store("connection refused".into()))
        }
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn incr(&self, key: &str) -> Result<i64> {
        self.incr_calls.fetch_add(1, Ordering::SeqCst);
        self.round_trip().await?;

        let mut v = self.counters.entry(key.to_string()).or_insert(0);
        *v += 1;
        Ok(*v)
    }

    async fn ping(&self) -> Result<()> {
        self.ping_calls.fetch_add(1, Ordering::SeqCst);
        self.round_trip().await
    }
}
