use crate::{DEFAULT_CHANNEL_CAPACITY, JsonFile, Result, Subscription};

use boq_core::{ACTIVITY_LOG_CAPACITY, Document, DocumentPatch};

use std::path::PathBuf;

use tokio::sync::{RwLock, broadcast};

/// Owns the shared document and fans every new snapshot out to subscribers.
pub struct DocumentHub {
    document: RwLock<Document>,
    sender: broadcast::Sender<Document>,
    file: Option<JsonFile>,
    activity_capacity: usize,
}

/// Result of a merge: the new snapshot and how many subscribers received it
#[derive(Debug, Clone)]
pub struct Merged {
    pub document: Document,
    pub receivers: usize,
}

impl DocumentHub {
    /// Hub without persistence
    pub fn in_memory(channel_capacity: usize) -> Self {
        Self::with_document(Document::default(), None, channel_capacity)
    }

    /// Load the document from `path`, creating the empty document on disk
    /// when the file is missing.
    pub async fn open(path: impl Into<PathBuf>, channel_capacity: usize) -> Result<Self> {
        let file = JsonFile::new(path);

        let document = match file.load::<Document>().await? {
            Some(document) => {
                log::info!(
                    "Loaded document from {} ({} projects, {} members)",
                    file.path().display(),
                    document.projects.len(),
                    document.members.len()
                );
                document
            }
            None => {
                let document = Document::default();
                file.save(&document).await?;
                log::info!("Created empty document at {}", file.path().display());
                document
            }
        };

        Ok(Self::with_document(document, Some(file), channel_capacity))
    }

    fn with_document(document: Document, file: Option<JsonFile>, channel_capacity: usize) -> Self {
        let capacity = if channel_capacity == 0 {
            DEFAULT_CHANNEL_CAPACITY
        } else {
            channel_capacity
        };
        let (sender, _) = broadcast::channel(capacity);

        Self {
            document: RwLock::new(document),
            sender,
            file,
            activity_capacity: ACTIVITY_LOG_CAPACITY,
        }
    }

    /// Cap the stored activity log; writers may send longer lists.
    pub fn with_activity_capacity(mut self, capacity: usize) -> Self {
        self.activity_capacity = capacity.max(1);
        self.document
            .get_mut()
            .activities
            .truncate(self.activity_capacity);
        self
    }

    pub fn activity_capacity(&self) -> usize {
        self.activity_capacity
    }

    pub async fn snapshot(&self) -> Document {
        self.document.read().await.clone()
    }

    /// The returned subscription starts with the current snapshot and sees
    /// every merge after it, with none missed in between.
    pub async fn subscribe(&self) -> Subscription {
        let document = self.document.read().await;
        let receiver = self.sender.subscribe();

        log::debug!(
            "Subscriber attached ({} total)",
            self.sender.receiver_count()
        );

        Subscription::new(document.clone(), receiver)
    }

    /// Apply a field-level merge, persist it, then broadcast the result.
    ///
    /// The in-memory document only changes once the write reached disk.
    pub async fn merge(&self, patch: DocumentPatch) -> Result<Merged> {
        let mut document = self.document.write().await;

        let mut updated = document.clone();
        updated.merge(patch);

        if updated.activities.len() > self.activity_capacity {
            log::debug!(
                "Trimming activity log from {} to {} entries",
                updated.activities.len(),
                self.activity_capacity
            );
            updated.activities.truncate(self.activity_capacity);
        }

        if let Some(file) = &self.file {
            file.save(&updated).await?;
        }

        *document = updated.clone();

        let receivers = match self.sender.send(updated.clone()) {
            Ok(count) => count,
            Err(_) => {
                log::debug!("Merged document had no active subscribers");
                0
            }
        };

        log::debug!("Broadcast snapshot to {} subscribers", receivers);

        Ok(Merged {
            document: updated,
            receivers,
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
