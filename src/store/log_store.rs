use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use super::StoreError;
use crate::clock::{Clock, SystemClock, MILLIS_PER_DAY};
use crate::db::{SlotStore, StorageError, LOGS_SLOT};
use crate::models::{MoodLogEntry, MoodType};

/// Window used by the dashboard and the trend analysis.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// The durable mood log.
///
/// The whole collection lives in one slot as a JSON array, newest entry
/// first. Every mutation reads the collection, changes it and writes it back
/// in one `set`, so there is never a partially updated log on disk.
///
/// Reads never fail: a missing, unreadable or corrupt slot reads as an empty
/// log. Writes report failures and leave the stored log as it was.
///
/// Clones share one write guard; mutations from any clone run one at a time.
#[derive(Clone)]
pub struct LogStore {
    slots: Arc<dyn SlotStore>,
    clock: Arc<dyn Clock>,
    writer: Arc<Mutex<()>>,
}

impl LogStore {
    pub fn new(slots: Arc<dyn SlotStore>) -> Self {
        Self::with_clock(slots, Arc::new(SystemClock))
    }

    pub fn with_clock(slots: Arc<dyn SlotStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            slots,
            clock,
            writer: Arc::new(Mutex::new(())),
        }
    }

    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    /// Records `mood` at the current time and returns the new entry.
    pub fn record_mood(&self, mood: MoodType) -> Result<MoodLogEntry, StoreError> {
        self.record_mood_with_note(mood, None)
    }

    /// Records `mood` together with `note` in a single write.
    pub fn record_mood_with_note(
        &self,
        mood: MoodType,
        note: Option<&str>,
    ) -> Result<MoodLogEntry, StoreError> {
        let _guard = self.lock_writer()?;
        let entry = MoodLogEntry {
            id: Uuid::new_v4(),
            mood_id: mood,
            timestamp: self.clock.now_ms(),
            note: note.map(str::to_string),
        };

        let mut entries = self.list_all();
        entries.insert(0, entry.clone());
        self.persist(&entries)?;

        tracing::debug!(id = %entry.id, mood = %mood, "Recorded mood");
        Ok(entry)
    }

    /// All entries, most recent first.
    pub fn list_all(&self) -> Vec<MoodLogEntry> {
        match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Treating unreadable mood log as empty");
                Vec::new()
            }
        }
    }

    /// Entries recorded within the last `window_days` days, most recent first.
    pub fn list_recent(&self, window_days: u32) -> Vec<MoodLogEntry> {
        let cutoff = self.clock.now_ms() - i64::from(window_days) * MILLIS_PER_DAY;
        self.list_all()
            .into_iter()
            .filter(|entry| entry.timestamp >= cutoff)
            .collect()
    }

    /// Replaces the note of entry `id` and returns the updated log.
    ///
    /// Any string is accepted, including an empty one. Deciding that a blank
    /// note means "skip" is up to the caller (see [`crate::journal::save_note`]).
    pub fn attach_note(&self, id: Uuid, note: &str) -> Result<Vec<MoodLogEntry>, StoreError> {
        let _guard = self.lock_writer()?;
        let mut entries = self.list_all();
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(StoreError::NotFound(id))?;
        entry.note = Some(note.to_string());

        self.persist(&entries)?;

        tracing::debug!(id = %id, "Attached note");
        Ok(entries)
    }

    /// Deletes every entry. Clearing an empty log is a no-op.
    pub fn clear_all(&self) -> Result<(), StoreError> {
        let _guard = self.lock_writer()?;
        self.slots.remove(LOGS_SLOT).map_err(StoreError::Write)?;
        tracing::info!("Cleared mood log");
        Ok(())
    }

    /// The most recent mood within the default window, if any.
    pub fn current_mood(&self) -> Option<MoodType> {
        self.list_recent(DEFAULT_WINDOW_DAYS)
            .first()
            .map(|entry| entry.mood_id)
    }

    fn lock_writer(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.writer
            .lock()
            .map_err(|_| StoreError::Write(StorageError::Unavailable("mood log lock poisoned".into())))
    }

    fn load(&self) -> Result<Vec<MoodLogEntry>, StoreError> {
        let Some(raw) = self.slots.get(LOGS_SLOT).map_err(StoreError::Read)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(StoreError::Corrupt)
    }

    fn persist(&self, entries: &[MoodLogEntry]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries).map_err(StoreError::Encode)?;
        self.slots.set(LOGS_SLOT, &raw).map_err(|e| {
            tracing::error!(error = %e, "Failed to persist mood log");
            StoreError::Write(e)
        })
    }
}
