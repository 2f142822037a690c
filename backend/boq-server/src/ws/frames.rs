//! JSON text frames exchanged over `/ws`.

use crate::ws::{Result as WsErrorResult, WsError};

use boq_core::{Document, DocumentPatch};

/// Outgoing frame: the full snapshot
pub fn encode_snapshot(document: &Document) -> WsErrorResult<String> {
    serde_json::to_string(document)
        .map_err(|e| WsError::invalid_message(format!("Failed to encode snapshot: {e}")))
}

/// Incoming frame: a partial snapshot to merge
pub fn decode_patch(text: &str) -> WsErrorResult<DocumentPatch> {
    serde_json::from_str(text)
        .map_err(|e| WsError::invalid_message(format!("Malformed patch: {e}")))
}
