//! Display-ready aggregates over a mood log snapshot.
//!
//! Both functions are pure: same entries and language in, same output out.

use crate::models::{Language, MoodFrequency, MoodLogEntry, MoodType};

/// Number of entries shown in the timeline strip.
pub const DEFAULT_TIMELINE_LIMIT: usize = 20;

/// Counts entries per mood, most frequent first.
///
/// Moods with equal counts keep catalog order. Moods that never occur are
/// left out, so an empty log gives an empty chart.
pub fn frequency_by_mood(entries: &[MoodLogEntry], language: Language) -> Vec<MoodFrequency> {
    let mut counts = [0usize; MoodType::ALL.len()];
    for entry in entries {
        counts[entry.mood_id.catalog_index()] += 1;
    }

    let mut frequencies: Vec<MoodFrequency> = MoodType::ALL
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(mood, count)| {
            let definition = mood.definition();
            MoodFrequency {
                mood_id: mood,
                count,
                color: definition.color_hex.to_string(),
                label: definition.label(language).to_string(),
            }
        })
        .collect();

    // Stable, so ties stay in catalog order.
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies
}

/// The `limit` most recent entries, oldest first, for left-to-right display.
///
/// Expects `entries` newest first, as the log store returns them.
pub fn recent_timeline_slice(entries: &[MoodLogEntry], limit: usize) -> Vec<MoodLogEntry> {
    entries.iter().take(limit).rev().cloned().collect()
}
