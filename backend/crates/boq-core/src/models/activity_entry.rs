use crate::ViewMode;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of entries the shared activity log keeps
pub const ACTIVITY_LOG_CAPACITY: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub text: String,
    /// Actor label, e.g. "Admin" or "Site User"
    #[serde(rename = "user")]
    pub actor: String,
    pub timestamp: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn new(text: impl Into<String>, view_mode: ViewMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            actor: view_mode.actor_label().to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Returns a new log with `entry` at index 0, truncated to `capacity`.
pub fn push_activity(
    log: &[ActivityEntry],
    entry: ActivityEntry,
    capacity: usize,
) -> Vec<ActivityEntry> {
    std::iter::once(entry)
        .chain(log.iter().cloned())
        .take(capacity)
        .collect()
}
