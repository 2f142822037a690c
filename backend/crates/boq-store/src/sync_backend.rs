use crate::{Result, Subscription};

use boq_core::DocumentPatch;

use async_trait::async_trait;

/// The shared-document service a session talks to.
#[async_trait]
pub trait SyncBackend: Send + Sync {
    /// Start receiving snapshots, beginning with the current one.
    async fn subscribe(&self) -> Result<Subscription>;

    /// Merge a partial snapshot into the shared document.
    async fn push(&self, patch: DocumentPatch) -> Result<()>;
}
