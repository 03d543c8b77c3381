//! The mood log and the reminder preference, on top of [`crate::db`] slots.

mod log_store;
mod preferences;

pub use log_store::{LogStore, DEFAULT_WINDOW_DAYS};
pub use preferences::Preferences;

use thiserror::Error;
use uuid::Uuid;

use crate::db::StorageError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage medium could not be read. Recovered by readers.
    #[error("failed to read mood log: {0}")]
    Read(#[source] StorageError),

    /// The stored collection did not parse. Recovered by readers.
    #[error("stored mood log is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to save mood log: {0}")]
    Write(#[source] StorageError),

    #[error("failed to encode mood log: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("mood log entry not found: {0}")]
    NotFound(Uuid),
}
