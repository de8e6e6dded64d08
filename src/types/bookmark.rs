use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// `favicon` holds the raw icon bytes; it is base64-encoded only at the JSON
/// boundary. `folder_id = None` means the bookmark is unfiled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub favicon: Option<Vec<u8>>,
    pub folder_id: Option<i64>,
}

/// Represents a folder for organizing bookmarks.
///
/// Folders may nest; `parent_id = None` means top-level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}
