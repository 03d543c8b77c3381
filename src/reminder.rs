//! Check-in reminders at 12:00 and 19:00.
//!
//! The scheduler polls the wall clock and fires a slot when hour and minute
//! match. The last fired `(date, slot)` pair is remembered so a slot fires at
//! most once per day, however often the clock is polled within that minute.

use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::locale;
use crate::models::Language;
use crate::store::Preferences;

pub const REMINDER_POLL_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderSlot {
    Noon,
    Evening,
}

impl ReminderSlot {
    pub const ALL: [ReminderSlot; 2] = [ReminderSlot::Noon, ReminderSlot::Evening];

    /// Trigger time as `(hour, minute)`.
    pub fn time(&self) -> (u32, u32) {
        match self {
            Self::Noon => (12, 0),
            Self::Evening => (19, 0),
        }
    }

    pub fn reminder(&self, language: Language) -> Reminder {
        let text = locale::text(language);
        let (title, body) = match self {
            Self::Noon => (text.noon_title, text.noon_body),
            Self::Evening => (text.evening_title, text.evening_body),
        };
        Reminder {
            slot: *self,
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Reminder {
    pub slot: ReminderSlot,
    pub title: String,
    pub body: String,
}

/// Where fired reminders go.
pub trait Notifier: Send + Sync {
    fn notify(&self, reminder: &Reminder) -> anyhow::Result<()>;
}

/// Writes reminders to stdout and the log.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, reminder: &Reminder) -> anyhow::Result<()> {
        tracing::info!(slot = ?reminder.slot, "Firing reminder");
        println!("🔔 {}\n   {}", reminder.title, reminder.body);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReminderScheduler {
    language: Language,
    last_fired: Option<(NaiveDate, ReminderSlot)>,
}

impl ReminderScheduler {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            last_fired: None,
        }
    }

    pub fn last_fired(&self) -> Option<(NaiveDate, ReminderSlot)> {
        self.last_fired
    }

    /// The slot due at `now`, unless it already fired today.
    pub fn due(&self, now: NaiveDateTime) -> Option<ReminderSlot> {
        let slot = ReminderSlot::ALL
            .into_iter()
            .find(|slot| slot.time() == (now.hour(), now.minute()))?;

        if self.last_fired == Some((now.date(), slot)) {
            return None;
        }
        Some(slot)
    }

    pub fn mark_fired(&mut self, date: NaiveDate, slot: ReminderSlot) {
        self.last_fired = Some((date, slot));
    }

    /// Fires the due slot, if any. A slot only counts as fired once the
    /// notifier accepted it, so a failed delivery is retried on the next poll.
    pub fn tick(&mut self, now: NaiveDateTime, notifier: &dyn Notifier) -> Option<ReminderSlot> {
        let slot = self.due(now)?;
        match notifier.notify(&slot.reminder(self.language)) {
            Ok(()) => {
                self.mark_fired(now.date(), slot);
                Some(slot)
            }
            Err(e) => {
                tracing::error!(error = %e, slot = ?slot, "Notification failed");
                None
            }
        }
    }
}

/// Polls the local clock until the task is dropped, firing reminders while
/// the stored preference is on.
pub async fn run_reminders(
    mut scheduler: ReminderScheduler,
    preferences: Preferences,
    notifier: &dyn Notifier,
) {
    let mut interval = tokio::time::interval(REMINDER_POLL_INTERVAL);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        if !preferences.notifications_enabled() {
            continue;
        }
        scheduler.tick(Local::now().naive_local(), notifier);
    }
}
