#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Handler-level tests for deadlines and concurrent increments.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse};

use visits_core::{VisitsResponse, COUNTER_KEY};
use visits_gateway::{app_state::AppState, handlers, ops, store::MemoryStore};

#[tokio::test(start_paused = true)]
async fn slow_incr_yields_500() {
    let store = Arc::new(MemoryStore::new());
    store.set_delay(Duration::from_millis(2100));
    let state = AppState::new("web-a", store.clone());

    let response = handlers::root(State(state)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(store.get(COUNTER_KEY), None);
}

#[tokio::test(start_paused = true)]
async fn slow_ping_yields_503() {
    let store = Arc::new(MemoryStore::new());
    store.set_delay(Duration::from_millis(1100));
    let state = AppState::new("web-a", store);

    let response = ops::health(State(state)).await.into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test(start_paused = true)]
async fn ping_delay_tolerated_by_root_deadline() {
    let store = Arc::new(MemoryStore::new());
    store.set_delay(Duration::from_millis(1500));
    let state = AppState::new("web-a", store);

    // 1.5s is past the health deadline but inside the root one.
    let response = handlers::root(State(state.clone())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let health = ops::health(State(state)).await.into_response();
    assert_eq!(health.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_roots_lose_no_updates() {
    const K: i64 = 64;
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new("web-a", store.clone());

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..K {
        tasks.spawn(handlers::root(State(state.clone())));
    }

    let mut seen = HashSet::new();
    while let Some(res) = tasks.join_next().await {
        let response = res.expect("task panicked");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let body: VisitsResponse = serde_json::from_slice(&bytes).expect("json");
        assert!(seen.insert(body.visits), "duplicate value {}", body.visits);
    }

    assert_eq!(seen, (1..=K).collect::<HashSet<_>>());
    assert_eq!(store.get(COUNTER_KEY), Some(K));
}
