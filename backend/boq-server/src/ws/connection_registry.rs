use crate::ws::{ConnectionId, Result as WsErrorResult, WsError};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{info, warn};
use tokio::sync::RwLock;

/// Live WebSocket connections, bounded by `max_total`
#[derive(Clone)]
pub struct ConnectionRegistry {
    inner: Arc<RwLock<HashMap<ConnectionId, DateTime<Utc>>>>,
    max_total: usize,
}

impl ConnectionRegistry {
    pub fn new(max_total: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            max_total,
        }
    }

    pub async fn register(&self) -> WsErrorResult<ConnectionId> {
        let mut connections = self.inner.write().await;

        if connections.len() >= self.max_total {
            warn!(
                "Connection limit reached: {}/{}",
                connections.len(),
                self.max_total
            );
            return Err(WsError::ConnectionLimitExceeded {
                current: connections.len(),
                max: self.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let connection_id = ConnectionId::new();
        connections.insert(connection_id, Utc::now());
        info!(
            "Registered connection {connection_id} ({} total)",
            connections.len()
        );

        Ok(connection_id)
    }

    pub async fn unregister(&self, connection_id: ConnectionId) {
        let mut connections = self.inner.write().await;

        if let Some(connected_at) = connections.remove(&connection_id) {
            info!(
                "Unregistered connection {connection_id} after {}s ({} remaining)",
                (Utc::now() - connected_at).num_seconds(),
                connections.len()
            );
        }
    }

    pub fn max_total(&self) -> usize {
        self.max_total
    }

    pub async fn total_count(&self) -> usize {
        self.inner.read().await.len()
    }
}
