//! Raw access to the shared document

use crate::{ApiResult, AppState};

use boq_core::{Document, DocumentPatch};

use axum::{Json, extract::State};

/// GET /api/v1/document
pub async fn get_document(State(state): State<AppState>) -> Json<Document> {
    Json(state.hub.snapshot().await)
}

/// PATCH /api/v1/document
///
/// Field-level merge; returns the snapshot the merge produced.
pub async fn patch_document(
    State(state): State<AppState>,
    Json(patch): Json<DocumentPatch>,
) -> ApiResult<Json<Document>> {
    let merged = state.hub.merge(patch).await?;
    log::debug!("REST patch merged ({} subscribers)", merged.receivers);
    Ok(Json(merged.document))
}
