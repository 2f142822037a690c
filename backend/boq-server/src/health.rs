use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let document = state.hub.snapshot().await;

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "websocket": {
                "status": "operational",
                "connections": state.registry.total_count().await,
            },
            "store": {
                "status": "operational",
                "projects": document.projects.len(),
                "members": document.members.len(),
                "subscribers": state.hub.subscriber_count(),
            },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - the process answers
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - the document is loaded and connections are accepted
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.registry.total_count().await >= state.registry.max_total() {
        return (StatusCode::SERVICE_UNAVAILABLE, "At connection limit").into_response();
    }
    (StatusCode::OK, "Ready").into_response()
}
