//! Named-slot storage.
//!
//! Everything Emotional Hue persists is a string stored under a well-known
//! key, the way a browser profile keeps values in local storage. The mood log
//! is one JSON array in one slot, so every write replaces the whole
//! collection at once.

mod file;
mod memory;
mod schema;
mod sqlite;

pub use file::FileSlots;
pub use memory::MemorySlots;
pub use sqlite::Database;

use thiserror::Error;

/// Slot holding the mood log (JSON array, most recent first).
pub const LOGS_SLOT: &str = "emotional_hue_logs_v1";

/// Slot holding the reminder preference (`"true"` / `"false"`).
pub const NOTIFICATIONS_SLOT: &str = "emotional_hue_notifications";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Whole-value get/set over named slots.
pub trait SlotStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing slot is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
