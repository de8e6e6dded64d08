// Wren storage components
// Each store owns one or more related tables and their CRUD operations.

pub mod bookmark_store;
pub mod history_store;
pub mod setting_store;

use std::thread;
use std::time::Duration;

use crate::types::errors::StoreError;

/// Retries `op` while it reports a busy database, sleeping with doubling
/// backoff between attempts. Any other outcome is returned immediately.
pub fn retry_busy<T, F>(attempts: u32, mut op: F) -> Result<T, StoreError>
where
    F: FnMut() -> Result<T, StoreError>,
{
    let mut delay = Duration::from_millis(25);
    let mut remaining = attempts;
    loop {
        match op() {
            Err(StoreError::Busy(_)) if remaining > 1 => {
                remaining -= 1;
                thread::sleep(delay);
                delay *= 2;
            }
            other => return other,
        }
    }
}
