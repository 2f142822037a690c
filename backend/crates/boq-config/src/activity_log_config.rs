use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACTIVITY_LOG_CAPACITY, MAX_ACTIVITY_LOG_CAPACITY,
};

use serde::Deserialize;

// Recent-activity log configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityLogConfig {
    /// Entries kept in the shared log, newest first (default: 20)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_ACTIVITY_LOG_CAPACITY
}

impl Default for ActivityLogConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl ActivityLogConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.capacity == 0 || self.capacity > MAX_ACTIVITY_LOG_CAPACITY {
            return Err(ConfigError::config(format!(
                "activity_log.capacity must be 1-{}, got {}",
                MAX_ACTIVITY_LOG_CAPACITY, self.capacity
            )));
        }
        Ok(())
    }
}
