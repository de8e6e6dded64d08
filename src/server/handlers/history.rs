//! History endpoints.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::error::{ApiError, ApiResult};
use crate::server::ApiState;
use crate::stores::history_store::{HistoryStore, HistoryStoreTrait};

use super::{decode_favicon, encode_favicon, ok_message, MessageResponse, RemoveRequest};

/// Wire form of a history entry; the favicon crosses the boundary
/// base64-encoded (or null).
#[derive(Debug, Serialize)]
pub struct HistoryEntryResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub time: String,
    pub favicon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddHistoryRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub time: Option<String>,
    pub favicon: Option<String>,
}

/// GET /get_history returns every recorded visit, most recent first.
pub async fn get_history(
    State(state): State<ApiState>,
) -> ApiResult<Json<Vec<HistoryEntryResponse>>> {
    let db = state.lock_db()?;
    let store = HistoryStore::new(db.connection());
    let entries = store.get_history()?;
    Ok(Json(
        entries
            .into_iter()
            .map(|e| HistoryEntryResponse {
                id: e.id,
                title: e.title,
                url: e.url,
                time: e.time,
                favicon: encode_favicon(e.favicon.as_deref()),
            })
            .collect(),
    ))
}

/// POST /add_history records a visit.
///
/// A favicon that is not valid base64 is logged and stored absent rather
/// than failing the request.
pub async fn add_history(
    State(state): State<ApiState>,
    Json(req): Json<AddHistoryRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let title = req.title.ok_or(ApiError::MissingField("title"))?;
    let url = req.url.ok_or(ApiError::MissingField("url"))?;
    if url.is_empty() {
        return Err(ApiError::InvalidField("url", "must not be empty".to_string()));
    }
    let time = req.time.ok_or(ApiError::MissingField("time"))?;
    let favicon = decode_favicon(req.favicon.as_deref());

    let db = state.lock_db()?;
    let mut store = HistoryStore::new(db.connection());
    store.add_entry(&title, &url, &time, favicon.as_deref())?;
    Ok(ok_message("History entry added successfully"))
}

/// POST /remove_history deletes a single entry by id.
pub async fn remove_history(
    State(state): State<ApiState>,
    Json(req): Json<RemoveRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let id = req.id.ok_or(ApiError::MissingField("id"))?;

    let db = state.lock_db()?;
    let mut store = HistoryStore::new(db.connection());
    store.remove_entry(id)?;
    Ok(ok_message("History entry removed successfully"))
}

/// POST /clear_history removes every entry, one row at a time.
///
/// Each removal commits on its own; a failure part-way through leaves the
/// remaining entries intact.
pub async fn clear_history(State(state): State<ApiState>) -> ApiResult<Json<MessageResponse>> {
    let db = state.lock_db()?;
    let mut store = HistoryStore::new(db.connection());
    for entry in store.get_history()? {
        store.remove_entry(entry.id)?;
    }
    Ok(ok_message("History cleared successfully"))
}
