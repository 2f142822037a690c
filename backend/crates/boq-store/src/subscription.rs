use boq_core::Document;

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

/// What a subscriber sees next.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// Full current document
    Snapshot(Document),
    /// The stream ended; no further snapshots will arrive
    Failed(String),
}

/// A live view of the shared document: the snapshot current at subscribe
/// time, then every later one.
pub struct Subscription {
    initial: Option<Document>,
    receiver: broadcast::Receiver<Document>,
}

impl Subscription {
    pub fn new(initial: Document, receiver: broadcast::Receiver<Document>) -> Self {
        Self {
            initial: Some(initial),
            receiver,
        }
    }

    /// Waits for the next event. A subscriber that fell behind skips
    /// straight to the newest snapshot.
    pub async fn next(&mut self) -> SyncEvent {
        if let Some(document) = self.initial.take() {
            return SyncEvent::Snapshot(document);
        }

        let mut latest = loop {
            match self.receiver.recv().await {
                Ok(document) => break document,
                Err(RecvError::Lagged(missed)) => {
                    log::warn!("Subscriber lagged, skipped {} snapshots", missed);
                }
                Err(RecvError::Closed) => {
                    return SyncEvent::Failed(String::from("sync channel closed"));
                }
            }
        };

        loop {
            match self.receiver.try_recv() {
                Ok(document) => latest = document,
                Err(TryRecvError::Lagged(missed)) => {
                    log::warn!("Subscriber lagged, skipped {} snapshots", missed);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }

        SyncEvent::Snapshot(latest)
    }
}
