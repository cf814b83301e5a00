//! Operational HTTP endpoints.
//!
//! - `/health`      : readiness, 503 while the store is unreachable
//! - `/favicon.ico` : 204, keeps browsers quiet, never touches the store
//! - fallback       : 404 for every other path

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::app_state::AppState;
use crate::store::HEALTH_DEADLINE;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.store().ping(HEALTH_DEADLINE).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "health check: store unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, "redis not available")
        }
    }
}

pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 page not found")
}
