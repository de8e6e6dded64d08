//! App core for Wren.
//!
//! Central owner of the shared storage handle. The GUI shell and the facade
//! both work through the same mutex-guarded connection.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::database::Database;
use crate::stores;
use crate::stores::setting_store::{SettingStore, SettingStoreTrait};
use crate::types::errors::StoreError;

/// Central application struct owning the storage handle.
///
/// `BookmarkStore`, `HistoryStore`, and `SettingStore` borrow the connection
/// with a lifetime parameter, so they are created on demand against the
/// locked `Database` rather than stored here.
pub struct App {
    db: Arc<Mutex<Database>>,
}

impl App {
    /// Opens (or creates) the storage file and prepares the schema.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self, StoreError> {
        let db = Database::open(db_path)?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    /// Returns the shared storage handle.
    pub fn database(&self) -> Arc<Mutex<Database>> {
        Arc::clone(&self.db)
    }

    /// Startup sequence: materialize default settings rows that are missing.
    ///
    /// Existing values are never overwritten here; a factory reset only ever
    /// happens through an explicit `restore_defaults` call. A previous
    /// instance shutting down may still hold the write lock, so a busy
    /// database is retried with backoff.
    pub fn startup(&self) -> Result<(), StoreError> {
        let db = self
            .db
            .lock()
            .map_err(|_| StoreError::Unavailable("storage lock poisoned".to_string()))?;
        let mut settings = SettingStore::new(db.connection());
        stores::retry_busy(3, || settings.ensure_defaults())
    }
}
