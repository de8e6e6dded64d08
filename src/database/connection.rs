//! SQLite database connection management for Wren.
//!
//! Provides the [`Database`] struct that wraps a `rusqlite::Connection`
//! and automatically prepares the schema on open.

use rusqlite::Connection;
use std::fs;
use std::path::Path;

use super::migrations;
use crate::types::errors::StoreError;

/// Core database wrapper providing SQLite connection management.
///
/// The `Database` struct owns a `rusqlite::Connection` and ensures that
/// all required tables and indexes are created when the database is opened.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a SQLite database at the given file path and prepares the schema.
    ///
    /// The containing directory is created if it does not exist yet.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the file or its directory cannot
    /// be created, and other [`StoreError`] variants if schema preparation fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Unavailable(e.to_string()))?;
            }
        }
        let conn = Connection::open(path).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Opens an in-memory SQLite database and prepares the schema.
    ///
    /// Useful for testing; the database is discarded when the `Database` is dropped.
    ///
    /// # Errors
    /// Returns a [`StoreError`] if the connection cannot be established or
    /// schema preparation fails.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Creates all tables and indexes that do not exist yet.
    ///
    /// Idempotent and safe to call on every startup.
    fn ensure_schema(&self) -> Result<(), StoreError> {
        Ok(migrations::run_all(&self.conn)?)
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    ///
    /// This allows other modules (stores, the facade) to execute queries
    /// against the database.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
