//! Domain models for Emotional Hue.
//!
//! - [`MoodType`] and [`MOODS`]: the fixed catalog of eight moods, each with a
//!   Japanese and English label, a description and a chart color.
//! - [`MoodLogEntry`]: one recorded mood. Entries are persisted as a single
//!   JSON array, most recent first.
//! - [`MoodFrequency`] and [`AnalysisResult`]: read-only results derived from
//!   a log snapshot.

mod analysis;
mod entry;
mod mood;

pub use analysis::*;
pub use entry::*;
pub use mood::*;
