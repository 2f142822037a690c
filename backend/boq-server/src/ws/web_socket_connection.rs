use crate::ws::frames::{decode_patch, encode_snapshot};
use crate::ws::{ConnectionConfig, ConnectionId, Result as WsErrorResult, ShutdownGuard, WsError};

use boq_core::Document;
use boq_store::{DocumentHub, SyncEvent};

use std::panic::Location;
use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

/// One client's live view of the shared document.
///
/// Every snapshot goes out as a JSON text frame; text frames coming in are
/// merged into the hub as patches.
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    config: ConnectionConfig,
    hub: Arc<DocumentHub>,
}

impl WebSocketConnection {
    pub fn new(connection_id: ConnectionId, config: ConnectionConfig, hub: Arc<DocumentHub>) -> Self {
        Self {
            connection_id,
            config,
            hub,
        }
    }

    pub async fn handle(self, socket: WebSocket, mut shutdown_guard: ShutdownGuard) -> WsErrorResult<()> {
        log::info!("WebSocket connection {} established", self.connection_id);

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Bounded so a slow client cannot grow memory without limit
        let (tx, mut rx) = mpsc::channel::<Message>(self.config.send_buffer_size);

        let mut subscription = self.hub.subscribe().await;

        let send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
        });

        // The first event is always the snapshot current at subscribe time
        let result = match subscription.next().await {
            SyncEvent::Snapshot(document) => self.send_snapshot(&document, &tx).await,
            SyncEvent::Failed(reason) => Err(WsError::ConnectionClosed {
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
        };

        let result = match result {
            Err(e) => Err(e),
            Ok(()) => loop {
                tokio::select! {
                    msg = ws_receiver.next() => {
                        match msg {
                            Some(Ok(Message::Close(_))) | None => {
                                log::info!("Connection {} closed by client", self.connection_id);
                                break Ok(());
                            }
                            Some(Ok(msg)) => {
                                if let Err(e) = self.handle_client_message(msg, &tx).await {
                                    log::error!(
                                        "Error handling message from connection {}: {}",
                                        self.connection_id,
                                        e
                                    );
                                    break Err(e);
                                }
                            }
                            Some(Err(e)) => {
                                log::error!(
                                    "WebSocket error on connection {}: {}",
                                    self.connection_id,
                                    e
                                );
                                break Err(WsError::ConnectionClosed {
                                    reason: format!("WebSocket error: {}", e),
                                    location: ErrorLocation::from(Location::caller()),
                                });
                            }
                        }
                    }

                    event = subscription.next() => {
                        match event {
                            SyncEvent::Snapshot(document) => {
                                if let Err(e) = self.send_snapshot(&document, &tx).await {
                                    break Err(e);
                                }
                            }
                            SyncEvent::Failed(reason) => {
                                log::info!(
                                    "Snapshot stream ended for connection {}: {}",
                                    self.connection_id,
                                    reason
                                );
                                break Ok(());
                            }
                        }
                    }

                    _ = shutdown_guard.wait() => {
                        log::info!("Shutting down connection {} gracefully", self.connection_id);
                        let _ = tx.send(Message::Close(None)).await;
                        break Ok(());
                    }
                }
            },
        };

        drop(tx);
        let _ = send_task.await;

        log::info!("WebSocket connection {} closed", self.connection_id);

        result
    }

    /// Malformed frames are logged and skipped; only transport failures end
    /// the connection.
    async fn handle_client_message(
        &self,
        msg: Message,
        tx: &mpsc::Sender<Message>,
    ) -> WsErrorResult<()> {
        match msg {
            Message::Text(text) => {
                self.apply_patch(text.as_str()).await;
                Ok(())
            }
            Message::Binary(data) => {
                log::debug!(
                    "Ignoring binary frame ({} bytes) from connection {}",
                    data.len(),
                    self.connection_id
                );
                Ok(())
            }
            Message::Ping(data) => tx
                .send(Message::Pong(data))
                .await
                .map_err(|_| WsError::send_buffer_full()),
            Message::Pong(_) | Message::Close(_) => Ok(()),
        }
    }

    async fn apply_patch(&self, text: &str) {
        let patch = match decode_patch(text) {
            Ok(patch) => patch,
            Err(e) => {
                log::warn!("Connection {}: {}", self.connection_id, e);
                return;
            }
        };

        if patch.is_empty() {
            log::debug!("Connection {} sent an empty patch", self.connection_id);
            return;
        }

        match self.hub.merge(patch).await {
            Ok(merged) => log::debug!(
                "Connection {} merged a patch ({} receivers)",
                self.connection_id,
                merged.receivers
            ),
            Err(e) => log::error!(
                "Connection {} patch could not be stored: {}",
                self.connection_id,
                e
            ),
        }
    }

    async fn send_snapshot(&self, document: &Document, tx: &mpsc::Sender<Message>) -> WsErrorResult<()> {
        let frame = encode_snapshot(document)?;
        tx.send(Message::Text(frame.into()))
            .await
            .map_err(|_| WsError::send_buffer_full())
    }
}
