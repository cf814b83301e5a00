#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Boot-time store check: an instance must refuse to start without its store.

use std::time::{Duration, Instant};

use visits_core::VisitsError;
use visits_gateway::{
    app_state::AppState,
    config::Config,
    store::{RedisStore, STARTUP_DEADLINE},
};

fn config_for(addr: impl Into<String>) -> Config {
    Config {
        redis_addr: addr.into(),
        ..Config::default()
    }
}

/// Accepts connections and holds them open without ever answering.
async fn silent_listener() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr").to_string();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((sock, _)) = listener.accept().await {
            held.push(sock);
        }
    });
    addr
}

#[tokio::test]
async fn refused_connect_reports_store_error_without_retrying() {
    let started = Instant::now();
    let res = tokio::time::timeout(Duration::from_secs(2), RedisStore::connect("127.0.0.1:1", None))
        .await
        .expect("connect must fail fast, not back off");

    assert!(matches!(res, Err(VisitsError::Store(_))));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn unreachable_store_aborts_startup_with_cause() {
    let started = Instant::now();
    let err = AppState::connect(&config_for("127.0.0.1:1"), "web-a".into())
        .await
        .err()
        .expect("startup must fail");

    assert!(matches!(err, VisitsError::Store(_)), "got {err:?}");
    assert!(started.elapsed() < STARTUP_DEADLINE);
}

#[tokio::test]
async fn silent_store_aborts_startup_at_deadline() {
    let addr = silent_listener().await;

    let started = Instant::now();
    let err = AppState::connect(&config_for(addr), "web-a".into())
        .await
        .err()
        .expect("startup must fail");

    assert!(matches!(err, VisitsError::Timeout), "got {err:?}");
    let elapsed = started.elapsed();
    assert!(elapsed >= STARTUP_DEADLINE - Duration::from_millis(50), "{elapsed:?}");
    assert!(elapsed < STARTUP_DEADLINE + Duration::from_secs(2), "{elapsed:?}");
}

#[tokio::test]
async fn malformed_address_aborts_startup() {
    let err = AppState::connect(&config_for("localhost"), "web-a".into())
        .await
        .err()
        .expect("startup must fail");

    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");
}
