//! Facade request handlers.

mod bookmarks;
mod history;
mod meta;

pub use bookmarks::{
    add_bookmark, add_folder, get_bookmarks, get_folders, remove_bookmark, remove_folder,
};
pub use history::{add_history, clear_history, get_history, remove_history};
pub use meta::about;

use axum::Json;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

/// Success body for mutation endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Request body carrying only a row id.
#[derive(Debug, Deserialize)]
pub struct RemoveRequest {
    pub id: Option<i64>,
}

pub(crate) fn ok_message(text: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: text.to_string(),
    })
}

/// Decodes a base64 favicon field into raw bytes.
///
/// Invalid base64 is logged and dropped so the surrounding request still
/// succeeds; an empty string counts as absent.
pub(crate) fn decode_favicon(favicon: Option<&str>) -> Option<Vec<u8>> {
    let raw = favicon?;
    if raw.is_empty() {
        return None;
    }
    match BASE64.decode(raw) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            tracing::warn!("discarding favicon that is not valid base64: {}", e);
            None
        }
    }
}

/// Encodes favicon bytes for the JSON boundary.
pub(crate) fn encode_favicon(favicon: Option<&[u8]>) -> Option<String> {
    favicon.map(|bytes| BASE64.encode(bytes))
}
