use std::fmt;

// === StoreError ===

/// Errors surfaced by the storage layer.
#[derive(Debug)]
pub enum StoreError {
    /// The storage file cannot be opened, created, or written.
    Unavailable(String),
    /// The database is locked by another writer; retrying may succeed.
    Busy(String),
    /// A relational constraint rejected the write.
    Constraint(String),
    /// Any other database failure.
    Query(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StoreError::Busy(msg) => write!(f, "Database busy: {}", msg),
            StoreError::Constraint(msg) => write!(f, "Constraint violated: {}", msg),
            StoreError::Query(msg) => write!(f, "Query failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    /// Classifies a SQLite failure by its primary result code.
    fn from(e: rusqlite::Error) -> Self {
        use rusqlite::ErrorCode;
        match &e {
            rusqlite::Error::SqliteFailure(err, _) => match err.code {
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => {
                    StoreError::Busy(e.to_string())
                }
                ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::ReadOnly
                | ErrorCode::PermissionDenied
                | ErrorCode::DiskFull
                | ErrorCode::SystemIoFailure => StoreError::Unavailable(e.to_string()),
                ErrorCode::ConstraintViolation => StoreError::Constraint(e.to_string()),
                _ => StoreError::Query(e.to_string()),
            },
            _ => StoreError::Query(e.to_string()),
        }
    }
}
