//! SortRosterHandler - Command handler for sorting the roster A-Z.

use std::sync::Arc;

use super::publish_or_warn;
use crate::domain::foundation::{EventId, Timestamp};
use crate::domain::roster::{Roster, RosterError, RosterSorted};
use crate::ports::{EventPublisher, Notifier, RosterStore};

/// Command to sort the editor text and save the result.
#[derive(Debug, Clone)]
pub struct SortRosterCommand {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct SortRosterResult {
    pub roster: Roster,
    pub event: RosterSorted,
}

pub struct SortRosterHandler {
    store: Arc<dyn RosterStore>,
    notifier: Arc<dyn Notifier>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SortRosterHandler {
    pub fn new(
        store: Arc<dyn RosterStore>,
        notifier: Arc<dyn Notifier>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            store,
            notifier,
            event_publisher,
        }
    }

    /// Returns `Ok(None)` without touching storage when there is nothing to sort.
    pub async fn handle(
        &self,
        cmd: SortRosterCommand,
    ) -> Result<Option<SortRosterResult>, RosterError> {
        let roster = Roster::parse(&cmd.text);
        if roster.is_empty() {
            return Ok(None);
        }

        let roster = roster.sorted();
        self.store.save(&roster).await?;
        self.notifier.notify("Sorted A–Z");

        let event = RosterSorted {
            event_id: EventId::new(),
            roster_key: self.store.key().to_string(),
            name_count: roster.len(),
            sorted_at: Timestamp::now(),
        };
        publish_or_warn(self.event_publisher.as_ref(), &event).await;

        Ok(Some(SortRosterResult { roster, event }))
    }
}
