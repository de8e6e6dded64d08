//! History store for Wren.
//!
//! Implements `HistoryStoreTrait` — recording, listing, and deleting visits,
//! backed by SQLite via `rusqlite`.

use rusqlite::{params, Connection};

use crate::types::errors::StoreError;
use crate::types::history::HistoryEntry;

/// Trait defining history storage operations.
pub trait HistoryStoreTrait {
    fn add_entry(
        &mut self,
        title: &str,
        url: &str,
        time: &str,
        favicon: Option<&[u8]>,
    ) -> Result<i64, StoreError>;
    fn get_history(&self) -> Result<Vec<HistoryEntry>, StoreError>;
    fn is_in_history(&self, url: &str) -> Result<bool, StoreError>;
    fn remove_entry(&mut self, id: i64) -> Result<(), StoreError>;
}

/// History store backed by a SQLite connection.
pub struct HistoryStore<'a> {
    conn: &'a Connection,
}

impl<'a> HistoryStore<'a> {
    /// Creates a new `HistoryStore` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Reads a single `HistoryEntry` row into a struct.
    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<HistoryEntry> {
        Ok(HistoryEntry {
            id: row.get(0)?,
            title: row.get(1)?,
            url: row.get(2)?,
            time: row.get(3)?,
            favicon: row.get(4)?,
        })
    }
}

impl<'a> HistoryStoreTrait for HistoryStore<'a> {
    /// Records a visit. Returns the generated row id.
    ///
    /// Always appends; repeated visits to one url create distinct rows.
    /// `time` is stored verbatim; the store never interprets it.
    fn add_entry(
        &mut self,
        title: &str,
        url: &str,
        time: &str,
        favicon: Option<&[u8]>,
    ) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO history (title, url, time, favicon) VALUES (?1, ?2, ?3, ?4)",
            params![title, url, time, favicon],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Lists every recorded visit, most recent first.
    fn get_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, url, time, favicon FROM history ORDER BY id DESC",
        )?;

        let rows = stmt.query_map([], Self::row_to_entry)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Returns whether any history entry stores exactly this url.
    fn is_in_history(&self, url: &str) -> Result<bool, StoreError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM history WHERE url = ?1",
            params![url],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Deletes a single history entry by id. Removing an id that is not
    /// present is a no-op.
    fn remove_entry(&mut self, id: i64) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM history WHERE id = ?1", params![id])?;
        Ok(())
    }
}
