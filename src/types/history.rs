use serde::{Deserialize, Serialize};

/// Represents a single history entry for a visited page.
///
/// `time` is the display string supplied by the caller when the visit was
/// recorded; the store never parses or generates it. Retrieval order is by
/// row id, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub time: String,
    pub favicon: Option<Vec<u8>>,
}
