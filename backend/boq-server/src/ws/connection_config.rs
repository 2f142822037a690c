use boq_config::WebSocketConfig;

/// Per-connection settings
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Outgoing frames queued before the client counts as too slow
    pub send_buffer_size: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::from(&WebSocketConfig::default())
    }
}

impl From<&WebSocketConfig> for ConnectionConfig {
    fn from(config: &WebSocketConfig) -> Self {
        Self {
            send_buffer_size: config.send_buffer_size,
        }
    }
}
