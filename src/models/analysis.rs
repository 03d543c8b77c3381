use serde::{Deserialize, Serialize};

/// What the trend analyzer says about a stretch of mood entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Objective summary of the emotional state, two sentences at most.
    pub summary: String,
    /// One concrete, gentle piece of advice.
    pub advice: String,
    /// A word naming the dominant color or mood of the period.
    pub dominant_color: String,
}

/// Frequency of one mood in a log snapshot, ready for charting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoodFrequency {
    pub mood_id: super::MoodType,
    pub count: usize,
    pub color: String,
    pub label: String,
}
