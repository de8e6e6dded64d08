//! Bookmark and folder endpoints.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::error::{ApiError, ApiResult};
use crate::server::ApiState;
use crate::stores::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::types::bookmark::Folder;

use super::{decode_favicon, encode_favicon, ok_message, MessageResponse, RemoveRequest};

#[derive(Debug, Deserialize)]
pub struct FolderQuery {
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct BookmarkQuery {
    pub folder_id: Option<i64>,
}

/// Wire form of a bookmark: the favicon crosses the boundary base64-encoded
/// (or null), and the folder is implied by the query.
#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub favicon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddFolderRequest {
    pub name: Option<String>,
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AddBookmarkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub folder_id: Option<i64>,
    pub favicon: Option<String>,
}

/// GET /get_folders lists folders under `parent_id`, top-level when absent.
pub async fn get_folders(
    State(state): State<ApiState>,
    Query(query): Query<FolderQuery>,
) -> ApiResult<Json<Vec<Folder>>> {
    let db = state.lock_db()?;
    let store = BookmarkStore::new(db.connection());
    Ok(Json(store.get_folders(query.parent_id)?))
}

/// GET /get_bookmarks lists bookmarks in `folder_id`, unfiled when absent.
pub async fn get_bookmarks(
    State(state): State<ApiState>,
    Query(query): Query<BookmarkQuery>,
) -> ApiResult<Json<Vec<BookmarkResponse>>> {
    let db = state.lock_db()?;
    let store = BookmarkStore::new(db.connection());
    let bookmarks = store.get_bookmarks(query.folder_id)?;
    Ok(Json(
        bookmarks
            .into_iter()
            .map(|b| BookmarkResponse {
                id: b.id,
                title: b.title,
                url: b.url,
                favicon: encode_favicon(b.favicon.as_deref()),
            })
            .collect(),
    ))
}

/// POST /add_folder creates a folder.
pub async fn add_folder(
    State(state): State<ApiState>,
    Json(req): Json<AddFolderRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let name = req.name.ok_or(ApiError::MissingField("name"))?;

    let db = state.lock_db()?;
    let mut store = BookmarkStore::new(db.connection());
    store.add_folder(&name, req.parent_id)?;
    Ok(ok_message("Folder added successfully"))
}

/// POST /remove_folder deletes a folder and everything it contains.
pub async fn remove_folder(
    State(state): State<ApiState>,
    Json(req): Json<RemoveRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let id = req.id.ok_or(ApiError::MissingField("id"))?;

    let db = state.lock_db()?;
    let mut store = BookmarkStore::new(db.connection());
    store.remove_folder(id)?;
    Ok(ok_message("Folder removed successfully"))
}

/// POST /add_bookmark saves a bookmark.
///
/// A favicon that is not valid base64 is logged and stored absent rather
/// than failing the request.
pub async fn add_bookmark(
    State(state): State<ApiState>,
    Json(req): Json<AddBookmarkRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let title = req.title.ok_or(ApiError::MissingField("title"))?;
    let url = req.url.ok_or(ApiError::MissingField("url"))?;
    if url.is_empty() {
        return Err(ApiError::InvalidField("url", "must not be empty".to_string()));
    }
    let favicon = decode_favicon(req.favicon.as_deref());

    let db = state.lock_db()?;
    let mut store = BookmarkStore::new(db.connection());
    store.add_bookmark(&title, &url, favicon.as_deref(), req.folder_id)?;
    Ok(ok_message("Bookmark added successfully"))
}

/// POST /remove_bookmark deletes a bookmark by id.
pub async fn remove_bookmark(
    State(state): State<ApiState>,
    Json(req): Json<RemoveRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let id = req.id.ok_or(ApiError::MissingField("id"))?;

    let db = state.lock_db()?;
    let mut store = BookmarkStore::new(db.connection());
    store.remove_bookmark(id)?;
    Ok(ok_message("Bookmark removed successfully"))
}
