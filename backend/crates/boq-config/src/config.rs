use crate::{
    ActivityLogConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, ServerConfig, StoreConfig, WebSocketConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    pub activity_log: ActivityLogConfig,
    pub websocket: WebSocketConfig,
}

impl Config {
    /// Load config from disk and the environment.
    ///
    /// 1. Config dir is `BOQ_CONFIG_DIR`, else `./.boq/` (created if missing)
    /// 2. `config.toml` in that dir, else defaults
    /// 3. `BOQ_*` environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: BOQ_CONFIG_DIR env var > ./.boq/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call after load() to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.store.validate()?;
        self.activity_log.validate()?;
        self.websocket.validate()?;
        Ok(())
    }

    /// Absolute path of the shared document file.
    pub fn document_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.store.path))
    }

    /// Absolute path of the log file, if logging to a file.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!(
            "  store: {} (channel capacity {})",
            self.store.path, self.store.channel_capacity
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!("  activity_log: capacity={}", self.activity_log.capacity);
        info!("  websocket: buffer={}", self.websocket.send_buffer_size);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BOQ_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BOQ_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "BOQ_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Store
        Self::apply_env_string("BOQ_STORE_PATH", &mut self.store.path);
        Self::apply_env_parse(
            "BOQ_STORE_CHANNEL_CAPACITY",
            &mut self.store.channel_capacity,
        );

        // Logging
        Self::apply_env_parse("BOQ_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BOQ_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BOQ_LOG_FILE", &mut self.logging.file);

        // Activity log
        Self::apply_env_parse(
            "BOQ_ACTIVITY_LOG_CAPACITY",
            &mut self.activity_log.capacity,
        );

        // WebSocket
        Self::apply_env_parse(
            "BOQ_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
