use crate::ws::{ConnectionId, ConnectionRegistry};

/// A registry slot held for one upgrade.
///
/// Dropped without `release` (the upgrade never completed), the slot is
/// handed back on a background task.
pub struct ConnectionLease {
    registry: ConnectionRegistry,
    connection_id: ConnectionId,
    released: bool,
}

impl ConnectionLease {
    pub fn new(registry: ConnectionRegistry, connection_id: ConnectionId) -> Self {
        Self {
            registry,
            connection_id,
            released: false,
        }
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }

    pub async fn release(mut self) {
        self.released = true;
        self.registry.unregister(self.connection_id).await;
    }
}

impl Drop for ConnectionLease {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        let registry = self.registry.clone();
        let connection_id = self.connection_id;
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                log::debug!("Connection {connection_id} dropped before upgrade, releasing slot");
                handle.spawn(async move { registry.unregister(connection_id).await });
            }
            Err(_) => log::warn!("Connection {connection_id} slot leaked: no runtime to release it"),
        }
    }
}
