//! `GET /`: increment the shared counter and report who served the request.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use visits_core::{VisitsResponse, COUNTER_KEY};

use crate::app_state::AppState;
use crate::store::INCR_DEADLINE;

pub async fn root(State(state): State<AppState>) -> Response {
    match state.store().incr(COUNTER_KEY, INCR_DEADLINE).await {
        Ok(visits) => Json(VisitsResponse::new(visits, state.pod())).into_response(),
        Err(e) => {
            tracing::error!(
                error = %e,
                code = e.client_code().as_str(),
                key = COUNTER_KEY,
                "failed to INCR counter"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
        }
    }
}
