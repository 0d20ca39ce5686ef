//! Liveness and readiness checks.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;

use super::{AppState, CatalogReadiness};

/// `GET /health/live`
pub async fn health_live() -> impl IntoResponse {
    Json(json!({ "status": "alive" }))
}

/// `GET /health/ready`
///
/// Ready once the database answers and the `shows` table can be counted.
pub async fn health_ready(State(state): State<Arc<AppState>>) -> Response {
    let database = state.store().ping().await.is_ok();
    let shows = if database {
        state.store().count_shows().await.ok()
    } else {
        None
    };

    let report = CatalogReadiness {
        ready: shows.is_some(),
        database,
        shows,
    };

    let status = if report.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report)).into_response()
}
