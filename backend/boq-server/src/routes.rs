use crate::{AppState, api, health, ws};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ws", get(ws::handler))
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route(
            "/api/v1/document",
            get(api::document::get_document).patch(api::document::patch_document),
        )
        .route("/api/v1/dashboard", get(api::dashboard::get_dashboard))
        .route(
            "/api/v1/projects/{id}/progress",
            get(api::projects::get_progress),
        )
        .route(
            "/api/v1/projects/{id}/s-curve",
            get(api::projects::get_s_curve),
        )
        .route("/api/v1/projects/{id}/board", get(api::projects::get_board))
        .with_state(state)
        // Browser dashboards are served from other origins
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
