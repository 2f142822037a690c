use crate::ws::{ConnectionConfig, ConnectionRegistry, ShutdownCoordinator};

use boq_store::DocumentHub;

use std::sync::Arc;

/// Shared state for every route and connection task
#[derive(Clone)]
pub struct AppState {
    pub hub: Arc<DocumentHub>,
    pub registry: ConnectionRegistry,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

impl AppState {
    pub fn new(hub: Arc<DocumentHub>, max_connections: usize, config: ConnectionConfig) -> Self {
        Self {
            hub,
            registry: ConnectionRegistry::new(max_connections),
            shutdown: ShutdownCoordinator::new(),
            config,
        }
    }
}
