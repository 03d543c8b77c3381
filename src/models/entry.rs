use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MoodType;

/// A single recorded mood.
///
/// Entries are created by the log store, never by callers directly. Only the
/// `note` can change after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoodLogEntry {
    pub id: Uuid,
    pub mood_id: MoodType,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MoodLogEntry {
    pub fn recorded_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.timestamp).unwrap_or_default()
    }
}

/// Request body for recording a mood.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMoodInput {
    pub mood_id: MoodType,
    /// Attached right away when present and not blank.
    #[serde(default)]
    pub note: Option<String>,
}

/// Request body for attaching a note to an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachNoteInput {
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_is_omitted_when_absent() {
        let entry = MoodLogEntry {
            id: Uuid::nil(),
            mood_id: MoodType::Calm,
            timestamp: 1_700_000_000_000,
            note: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["moodId"], "CALM");
        assert_eq!(json["timestamp"], 1_700_000_000_000i64);
        assert!(json.get("note").is_none());
    }

    #[test]
    fn reads_entries_written_without_note_field() {
        let raw = r#"{"id":"7f1f7b8e-3f7e-4a53-9a51-1b8f2f5c9d10","moodId":"JOY","timestamp":1}"#;
        let entry: MoodLogEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.mood_id, MoodType::Joy);
        assert!(entry.note.is_none());
    }
}
