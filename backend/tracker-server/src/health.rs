use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - status, version and current project count
pub async fn health(State(state): State<AppState>) -> Response {
    let project_count = state.repository.read().await.len();

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "projects": project_count,
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}
