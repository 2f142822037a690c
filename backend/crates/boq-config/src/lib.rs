mod activity_log_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod store_config;
mod websocket_config;

#[cfg(test)]
mod tests;

pub use activity_log_config::ActivityLogConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use store_config::StoreConfig;
pub use websocket_config::WebSocketConfig;

const CONFIG_DIR_ENV: &str = "BOQ_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".boq";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 1_000;
const MAX_CONNECTIONS_LIMIT: usize = 100_000;

const DEFAULT_DOCUMENT_FILENAME: &str = "document.json";
const DEFAULT_CHANNEL_CAPACITY: usize = 64;
const MIN_CHANNEL_CAPACITY: usize = 1;
const MAX_CHANNEL_CAPACITY: usize = 10_000;

const DEFAULT_ACTIVITY_LOG_CAPACITY: usize = 20;
const MAX_ACTIVITY_LOG_CAPACITY: usize = 1_000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
