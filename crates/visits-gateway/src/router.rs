//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(ops::health))
        .route("/favicon.ico", get(ops::favicon))
        .fallback(ops::not_found)
        .with_state(state)
}
