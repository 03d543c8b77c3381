//! The calling layer between user input and the log store.
//!
//! The store accepts any note, including an empty one. Whether a blank note
//! means "skip" is decided here, once, for both the CLI and the HTTP API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Language, MoodFrequency, MoodLogEntry, MoodType};
use crate::store::{LogStore, StoreError};
use crate::views;

/// Everything the presentation layer needs after a refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Newest mood in the window; the app is themed after it.
    pub current_mood: Option<MoodType>,
    pub entries: Vec<MoodLogEntry>,
    pub frequency: Vec<MoodFrequency>,
    pub timeline: Vec<MoodLogEntry>,
}

fn non_blank(note: &str) -> Option<&str> {
    if note.trim().is_empty() {
        None
    } else {
        Some(note)
    }
}

/// Records `mood`, with `note` when it has content. The entry and its note
/// are stored in one write.
pub fn log_mood(
    store: &LogStore,
    mood: MoodType,
    note: Option<&str>,
) -> Result<MoodLogEntry, StoreError> {
    store.record_mood_with_note(mood, note.and_then(non_blank))
}

/// Attaches `note` to entry `id` unless it is blank.
///
/// Returns `Ok(None)` when the note was skipped; the store is not touched.
pub fn save_note(
    store: &LogStore,
    id: Uuid,
    note: &str,
) -> Result<Option<Vec<MoodLogEntry>>, StoreError> {
    match non_blank(note) {
        Some(note) => store.attach_note(id, note).map(Some),
        None => {
            tracing::debug!(id = %id, "Skipping blank note");
            Ok(None)
        }
    }
}

pub fn dashboard(
    store: &LogStore,
    language: Language,
    window_days: u32,
    timeline_limit: usize,
) -> Dashboard {
    let entries = store.list_recent(window_days);
    Dashboard {
        current_mood: entries.first().map(|e| e.mood_id),
        frequency: views::frequency_by_mood(&entries, language),
        timeline: views::recent_timeline_slice(&entries, timeline_limit),
        entries,
    }
}
