//! Setting store for Wren.
//!
//! Implements `SettingStoreTrait` — persisted name/value settings with a
//! compiled default map, backed by SQLite via `rusqlite`.
//!
//! A missing row and a row holding the null marker both read as unset;
//! `delete_setting` resets a name to its compiled default rather than
//! removing the row.

use rusqlite::{params, Connection, OptionalExtension};

use crate::platform;
use crate::scheme;
use crate::types::errors::StoreError;
use crate::types::setting::Setting;

/// Setting names that have compiled defaults.
pub const SETTING_NAMES: [&str; 5] = ["homepage", "search_engine", "mode", "download_dir", "user"];

/// Returns the compiled default for a setting name.
///
/// `user` deliberately has no default value (it resets to the null marker),
/// and so does any unrecognized name.
pub fn default_value(name: &str) -> Option<String> {
    match name {
        "homepage" => Some(scheme::HOME_URL.to_string()),
        "search_engine" => Some("google".to_string()),
        "mode" => Some("light".to_string()),
        "download_dir" => Some(platform::get_download_dir().to_string_lossy().into_owned()),
        _ => None,
    }
}

/// Trait defining setting storage operations.
pub trait SettingStoreTrait {
    fn get_setting(&self, name: &str) -> Result<Option<String>, StoreError>;
    fn get_all_settings(&self) -> Result<Vec<Setting>, StoreError>;
    fn set_setting(&mut self, name: &str, value: &str) -> Result<(), StoreError>;
    fn update_setting(&mut self, name: &str, value: Option<&str>) -> Result<(), StoreError>;
    fn delete_setting(&mut self, name: &str) -> Result<(), StoreError>;
    fn ensure_defaults(&mut self) -> Result<(), StoreError>;
    fn restore_defaults(&mut self) -> Result<(), StoreError>;
}

/// Setting store backed by a SQLite connection.
pub struct SettingStore<'a> {
    conn: &'a Connection,
}

impl<'a> SettingStore<'a> {
    /// Creates a new `SettingStore` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Reads a single `Setting` row into a struct.
    fn row_to_setting(row: &rusqlite::Row) -> rusqlite::Result<Setting> {
        Ok(Setting {
            name: row.get(0)?,
            value: row.get(1)?,
        })
    }
}

impl<'a> SettingStoreTrait for SettingStore<'a> {
    /// Returns the stored value for `name`.
    ///
    /// A missing row and a stored null marker both come back as `None`;
    /// callers fall back to `default_value` for unset names.
    fn get_setting(&self, name: &str) -> Result<Option<String>, StoreError> {
        let value: Option<Option<String>> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value.flatten())
    }

    /// Lists every stored setting row.
    fn get_all_settings(&self) -> Result<Vec<Setting>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, value FROM settings ORDER BY name")?;

        let rows = stmt.query_map([], Self::row_to_setting)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Records a new name/value pair. The name must not exist yet.
    fn set_setting(&mut self, name: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO settings (name, value) VALUES (?1, ?2)",
            params![name, value],
        )?;
        Ok(())
    }

    /// Rewrites the value of an existing row. A name with no row is silently
    /// left alone; a `None` value writes the null marker.
    fn update_setting(&mut self, name: &str, value: Option<&str>) -> Result<(), StoreError> {
        self.conn.execute(
            "UPDATE settings SET value = ?1 WHERE name = ?2",
            params![value, name],
        )?;
        Ok(())
    }

    /// Resets `name` to its compiled default.
    ///
    /// A name without a compiled default (including `user`) is set to the
    /// null marker rather than removed.
    fn delete_setting(&mut self, name: &str) -> Result<(), StoreError> {
        let value = default_value(name);
        self.update_setting(name, value.as_deref())
    }

    /// Inserts the default row for each known name that is missing.
    ///
    /// Existing values are never touched, so this is safe to run on every
    /// startup.
    fn ensure_defaults(&mut self) -> Result<(), StoreError> {
        for name in SETTING_NAMES {
            self.conn.execute(
                "INSERT OR IGNORE INTO settings (name, value) VALUES (?1, ?2)",
                params![name, default_value(name)],
            )?;
        }
        Ok(())
    }

    /// Factory reset: overwrites every known setting with its compiled
    /// default, inserting rows that are missing.
    ///
    /// Only ever runs when explicitly requested, never as part of startup.
    fn restore_defaults(&mut self) -> Result<(), StoreError> {
        for name in SETTING_NAMES {
            self.conn.execute(
                "INSERT OR REPLACE INTO settings (name, value) VALUES (?1, ?2)",
                params![name, default_value(name)],
            )?;
        }
        Ok(())
    }
}
