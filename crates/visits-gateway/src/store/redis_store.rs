//! Redis-backed counter store.
//!
//! Uses a `ConnectionManager`: a cloneable multiplexed connection that is safe
//! to share across handlers. Retries are disabled: a failed connect or command
//! goes straight back to the caller, and a dropped connection is re-dialed once
//! on the next command.

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, ConnectionAddr, ConnectionInfo, RedisConnectionInfo, RedisError};

use visits_core::error::{Result, VisitsError};

use super::CounterStore;

#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Open a connection to `addr` (`host:port`), database 0.
    pub async fn connect(addr: &str, password: Option<&str>) -> Result<Self> {
        let info = connection_info(addr, password)?;
        let client = redis::Client::open(info).map_err(store_err)?;
        let conn = ConnectionManager::new_with_config(client, manager_config())
            .await
            .map_err(store_err)?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl CounterStore for RedisStore {
    async fn incr(&self, key: &str) -> Result<i64> {
        let mut conn = self.conn.clone();
        let v: i64 = conn.incr(key, 1).await.map_err(store_err)?;
        Ok(v)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await.map_err(store_err)?;
        Ok(())
    }
}

fn manager_config() -> ConnectionManagerConfig {
    ConnectionManagerConfig::new().set_number_of_retries(0)
}

fn store_err(e: RedisError) -> VisitsError {
    VisitsError::Store(e.to_string())
}

/// Build connection parameters from `host:port` and an optional password.
pub fn connection_info(addr: &str, password: Option<&str>) -> Result<ConnectionInfo> {
    let (host, port) = addr
        .rsplit_once(':')
        .ok_or_else(|| VisitsError::Config(format!("redis address must be host:port, got {addr:?}")))?;

    let host = host.trim_start_matches('[').trim_end_matches(']');
    if host.is_empty() {
        return Err(VisitsError::Config(format!("redis address has no host: {addr:?}")));
    }
    let port: u16 = port
        .parse()
        .map_err(|e| VisitsError::Config(format!("redis port invalid in {addr:?}: {e}")))?;

    Ok(ConnectionInfo {
        addr: ConnectionAddr::Tcp(host.to_string(), port),
        redis: RedisConnectionInfo {
            db: 0,
            password: password.map(str::to_owned),
            ..Default::default()
        },
    })
}
