mod subscription;

use crate::{DocumentHub, LocalBackend, Result, Session, StoreError, Subscription, SyncBackend};

use boq_core::{CreateProject, DocumentPatch};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

pub(crate) fn create_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: String::new(),
        start_date: None,
    }
}

/// Session over an in-memory hub, already live
pub(crate) async fn live_session() -> Session<LocalBackend> {
    let hub = Arc::new(DocumentHub::in_memory(16));
    let mut session = Session::new(LocalBackend::new(hub));
    session.connect().await.unwrap();
    assert!(session.pump().await);
    session
}

/// Fold the next snapshot into the session
pub(crate) async fn sync(session: &mut Session<LocalBackend>) {
    assert!(session.pump().await);
}

/// Backend whose subscription never comes up; counts pushes
#[derive(Default, Clone)]
pub(crate) struct UnreachableBackend {
    pub(crate) pushes: Arc<AtomicUsize>,
}

impl UnreachableBackend {
    pub(crate) fn push_count(&self) -> usize {
        self.pushes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SyncBackend for UnreachableBackend {
    async fn subscribe(&self) -> Result<Subscription> {
        Err(StoreError::backend("host unreachable"))
    }

    async fn push(&self, _patch: DocumentPatch) -> Result<()> {
        self.pushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
