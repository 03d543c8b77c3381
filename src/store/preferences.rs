use std::sync::Arc;

use super::StoreError;
use crate::db::{SlotStore, NOTIFICATIONS_SLOT};

/// User preferences kept next to the mood log.
#[derive(Clone)]
pub struct Preferences {
    slots: Arc<dyn SlotStore>,
}

impl Preferences {
    pub fn new(slots: Arc<dyn SlotStore>) -> Self {
        Self { slots }
    }

    /// Whether the 12:00 / 19:00 reminders are on. Anything other than a
    /// stored `"true"` counts as off.
    pub fn notifications_enabled(&self) -> bool {
        match self.slots.get(NOTIFICATIONS_SLOT) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read notification preference");
                false
            }
        }
    }

    pub fn set_notifications(&self, enabled: bool) -> Result<(), StoreError> {
        let value = if enabled { "true" } else { "false" };
        self.slots
            .set(NOTIFICATIONS_SLOT, value)
            .map_err(StoreError::Write)?;
        tracing::info!(enabled, "Updated notification preference");
        Ok(())
    }
}
