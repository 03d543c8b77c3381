//! Emotional Hue: record how you feel as one of eight colors.
//!
//! The crate is organised leaf-first:
//!
//! - [`models`]: the mood catalog and the persisted entry types.
//! - [`db`]: named-slot storage backends (SQLite, JSON files, memory).
//! - [`store`]: the mood log itself and the notification preference.
//! - [`views`]: pure aggregations over a log snapshot.
//! - [`journal`]: the calling layer used by the CLI and the HTTP API.
//! - [`analysis`]: trend summaries from a text-generation service.
//! - [`reminder`]: the twice-daily check-in reminders.

pub mod analysis;
pub mod api;
pub mod clock;
pub mod config;
pub mod db;
pub mod journal;
pub mod locale;
pub mod models;
pub mod reminder;
pub mod render;
pub mod store;
pub mod views;
