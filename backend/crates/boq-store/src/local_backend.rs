use crate::{DocumentHub, Result, Subscription, SyncBackend};

use boq_core::DocumentPatch;

use std::sync::Arc;

use async_trait::async_trait;

/// In-process backend over a shared hub
#[derive(Clone)]
pub struct LocalBackend {
    hub: Arc<DocumentHub>,
}

impl LocalBackend {
    pub fn new(hub: Arc<DocumentHub>) -> Self {
        Self { hub }
    }

    pub fn hub(&self) -> &Arc<DocumentHub> {
        &self.hub
    }
}

#[async_trait]
impl SyncBackend for LocalBackend {
    async fn subscribe(&self) -> Result<Subscription> {
        Ok(self.hub.subscribe().await)
    }

    async fn push(&self, patch: DocumentPatch) -> Result<()> {
        self.hub.merge(patch).await.map(|_| ())
    }
}
