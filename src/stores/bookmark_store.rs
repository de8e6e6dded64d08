//! Bookmark store for Wren.
//!
//! Implements `BookmarkStoreTrait` — CRUD operations for bookmarks and their
//! folders, backed by SQLite via `rusqlite`.

use rusqlite::{params, Connection};

use crate::types::bookmark::{Bookmark, Folder};
use crate::types::errors::StoreError;

/// Trait defining bookmark storage operations.
pub trait BookmarkStoreTrait {
    fn add_bookmark(
        &mut self,
        title: &str,
        url: &str,
        favicon: Option<&[u8]>,
        folder_id: Option<i64>,
    ) -> Result<i64, StoreError>;
    fn get_bookmarks(&self, folder_id: Option<i64>) -> Result<Vec<Bookmark>, StoreError>;
    fn remove_bookmark(&mut self, id: i64) -> Result<(), StoreError>;
    fn is_bookmarked(&self, url: &str) -> Result<bool, StoreError>;
    fn add_folder(&mut self, name: &str, parent_id: Option<i64>) -> Result<i64, StoreError>;
    fn get_folders(&self, parent_id: Option<i64>) -> Result<Vec<Folder>, StoreError>;
    fn remove_folder(&mut self, id: i64) -> Result<(), StoreError>;
}

/// Bookmark store backed by a SQLite connection.
pub struct BookmarkStore<'a> {
    conn: &'a Connection,
}

impl<'a> BookmarkStore<'a> {
    /// Creates a new `BookmarkStore` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Reads a single `Bookmark` row into a struct.
    fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: row.get(0)?,
            title: row.get(1)?,
            url: row.get(2)?,
            favicon: row.get(3)?,
            folder_id: row.get(4)?,
        })
    }

    /// Reads a single `Folder` row into a struct.
    fn row_to_folder(row: &rusqlite::Row) -> rusqlite::Result<Folder> {
        Ok(Folder {
            id: row.get(0)?,
            name: row.get(1)?,
            parent_id: row.get(2)?,
        })
    }
}

impl<'a> BookmarkStoreTrait for BookmarkStore<'a> {
    /// Adds a bookmark. Returns the generated row id.
    ///
    /// Inserts unconditionally; the same url may be bookmarked any number of
    /// times. Callers wanting at-most-one bookmark per url check
    /// `is_bookmarked` first.
    fn add_bookmark(
        &mut self,
        title: &str,
        url: &str,
        favicon: Option<&[u8]>,
        folder_id: Option<i64>,
    ) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO bookmarks (title, url, favicon, folder_id) VALUES (?1, ?2, ?3, ?4)",
            params![title, url, favicon, folder_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Lists bookmarks in a specific folder, or unfiled bookmarks when
    /// `folder_id` is `None`.
    fn get_bookmarks(&self, folder_id: Option<i64>) -> Result<Vec<Bookmark>, StoreError> {
        let mut stmt = match folder_id {
            Some(_) => self.conn.prepare(
                "SELECT id, title, url, favicon, folder_id \
                 FROM bookmarks WHERE folder_id = ?1 ORDER BY id",
            ),
            None => self.conn.prepare(
                "SELECT id, title, url, favicon, folder_id \
                 FROM bookmarks WHERE folder_id IS NULL ORDER BY id",
            ),
        }?;

        let rows = match folder_id {
            Some(fid) => stmt.query_map(params![fid], Self::row_to_bookmark),
            None => stmt.query_map([], Self::row_to_bookmark),
        }?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Removes a bookmark by id. Removing an id that is not present is a no-op.
    fn remove_bookmark(&mut self, id: i64) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM bookmarks WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Returns whether any bookmark stores exactly this url.
    fn is_bookmarked(&self, url: &str) -> Result<bool, StoreError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM bookmarks WHERE url = ?1",
            params![url],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Creates a new folder. Returns the generated row id.
    fn add_folder(&mut self, name: &str, parent_id: Option<i64>) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO folders (name, parent_id) VALUES (?1, ?2)",
            params![name, parent_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Lists folders under a specific parent, or top-level folders when
    /// `parent_id` is `None`.
    fn get_folders(&self, parent_id: Option<i64>) -> Result<Vec<Folder>, StoreError> {
        let mut stmt = match parent_id {
            Some(_) => self.conn.prepare(
                "SELECT id, name, parent_id FROM folders WHERE parent_id = ?1 ORDER BY id",
            ),
            None => self.conn.prepare(
                "SELECT id, name, parent_id FROM folders WHERE parent_id IS NULL ORDER BY id",
            ),
        }?;

        let rows = match parent_id {
            Some(pid) => stmt.query_map(params![pid], Self::row_to_folder),
            None => stmt.query_map([], Self::row_to_folder),
        }?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Deletes a folder together with everything it contains.
    ///
    /// One transaction removes the bookmarks of the folder and of every
    /// descendant folder, then the descendant folders, then the folder row
    /// itself. Deleting an id that is not present is a no-op.
    fn remove_folder(&mut self, id: i64) -> Result<(), StoreError> {
        let tx = self.conn.unchecked_transaction()?;

        let mut subtree: Vec<i64> = Vec::new();
        {
            let mut stmt = tx.prepare(
                "WITH RECURSIVE subtree(id) AS (
                     SELECT id FROM folders WHERE id = ?1
                     UNION ALL
                     SELECT f.id FROM folders f JOIN subtree s ON f.parent_id = s.id
                 )
                 SELECT id FROM subtree",
            )?;
            let rows = stmt.query_map(params![id], |row| row.get(0))?;
            for row in rows {
                subtree.push(row?);
            }
        }

        for folder_id in &subtree {
            tx.execute(
                "DELETE FROM bookmarks WHERE folder_id = ?1",
                params![folder_id],
            )?;
        }

        // The recursive walk yields parents before children; delete in
        // reverse so the self-referencing foreign key stays satisfied.
        for folder_id in subtree.iter().rev() {
            tx.execute("DELETE FROM folders WHERE id = ?1", params![folder_id])?;
        }

        tx.commit()?;
        Ok(())
    }
}
