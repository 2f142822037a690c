pub mod app_state;
pub mod document_hub;
pub mod error;
pub mod json_file;
pub mod local_backend;
pub mod session;
pub mod subscription;
pub mod sync_backend;

#[cfg(test)]
mod tests;

pub use app_state::{Action, AppState, ConnectionStatus, reduce};
pub use document_hub::{DocumentHub, Merged};
pub use error::{Result, StoreError};
pub use json_file::JsonFile;
pub use local_backend::LocalBackend;
pub use session::{PushOutcome, Session};
pub use subscription::{Subscription, SyncEvent};
pub use sync_backend::SyncBackend;

/// Snapshots buffered per subscriber when no capacity is configured
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;
