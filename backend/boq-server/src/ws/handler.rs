use crate::AppState;
use crate::ws::{ConnectionLease, WebSocketConnection};

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::Response,
};
use log::{error, warn};

/// GET /ws - upgrade to a snapshot stream
pub async fn handler(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    let connection_id = state.registry.register().await.map_err(|e| {
        warn!("Rejecting WebSocket upgrade: {}", e);
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    // Moved into the upgrade callback; a failed upgrade drops it unreleased
    let lease = ConnectionLease::new(state.registry.clone(), connection_id);

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, lease, state)))
}

async fn handle_socket(socket: WebSocket, lease: ConnectionLease, state: AppState) {
    let connection_id = lease.connection_id();
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection = WebSocketConnection::new(connection_id, state.config.clone(), state.hub.clone());
    let result = connection.handle(socket, shutdown_guard).await;

    lease.release().await;

    if let Err(e) = result {
        error!("Connection {connection_id} error: {e}");
    }
}
