pub mod connection_config;
pub mod connection_id;
pub mod connection_lease;
pub mod connection_registry;
pub mod error;
pub mod frames;
pub mod handler;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod web_socket_connection;

pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_lease::ConnectionLease;
pub use connection_registry::ConnectionRegistry;
pub use error::{Result, WsError};
pub use handler::handler;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use web_socket_connection::WebSocketConnection;
