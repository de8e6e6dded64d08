//! Local HTTP facade over the storage layer.
//!
//! The facade binds loopback only and backs the browser's internal pages:
//! JSON endpoints for bookmarks, folders, and history, plus static serving
//! of the pages themselves. The GUI shell uses the stores in-process; the
//! facade exists for the pages' JavaScript, and runs as a background task
//! so the shell is never blocked by it.

pub mod error;
pub mod handlers;
pub mod routes;

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::net::TcpListener;

use crate::database::Database;
use crate::server::error::ApiError;
use crate::types::errors::StoreError;

pub use routes::create_router;

/// Shared state for facade handlers.
#[derive(Clone)]
pub struct ApiState {
    db: Arc<Mutex<Database>>,
}

impl ApiState {
    /// Creates facade state around the shared storage handle.
    pub fn new(db: Arc<Mutex<Database>>) -> Self {
        Self { db }
    }

    /// Locks the shared storage handle for the duration of one request.
    pub(crate) fn lock_db(&self) -> Result<MutexGuard<'_, Database>, ApiError> {
        self.db
            .lock()
            .map_err(|_| ApiError::Store(StoreError::Unavailable("storage lock poisoned".to_string())))
    }
}

/// Serves the facade on an already-bound listener until the task is dropped
/// or the listener fails.
pub async fn serve(
    listener: TcpListener,
    state: ApiState,
    pages_dir: PathBuf,
) -> std::io::Result<()> {
    let router = create_router(state, &pages_dir);
    axum::serve(listener, router).await
}
