use axum::{extract::rejection::JsonRejection, extract::State, Json};
use common::types::SaveAck;
use serde_json::Value;
use tracing::info;

use crate::errors::ApiError;
use crate::state::AppState;

/// GET /data: the whole current document.
pub async fn get_data(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let doc = state.store.load().await.map_err(ApiError::Load)?;
    Ok(Json(doc))
}

/// POST /data: replace the document with the request body, verbatim.
pub async fn save_data(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SaveAck>, ApiError> {
    let Json(doc) = payload?;
    state.store.save(doc).await.map_err(ApiError::Save)?;
    info!(event = "document_saved", backend = %state.store.backend(), "document replaced");
    Ok(Json(SaveAck::saved()))
}
