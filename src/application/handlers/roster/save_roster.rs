//! SaveRosterHandler - Command handler for saving editor text as the roster.

use std::sync::Arc;

use tracing::debug;

use super::publish_or_warn;
use crate::domain::foundation::{EventId, Timestamp};
use crate::domain::roster::{Roster, RosterError, RosterSaved};
use crate::ports::{EventPublisher, Notifier, RosterStore};

/// Command to replace the roster with the lines of `text`.
#[derive(Debug, Clone)]
pub struct SaveRosterCommand {
    pub text: String,
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveRosterResult {
    pub roster: Roster,
    pub event: RosterSaved,
}

/// Handler for saving the roster.
pub struct SaveRosterHandler {
    store: Arc<dyn RosterStore>,
    notifier: Arc<dyn Notifier>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SaveRosterHandler {
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

    pub async fn handle(&self, cmd: SaveRosterCommand) -> Result<SaveRosterResult, RosterError> {
        // 1. Parse editor text into trimmed, non-blank names
        let roster = Roster::parse(&cmd.text);

        // 2. Persist (an empty roster removes the record)
        self.store.save(&roster).await?;
        debug!(names = roster.len(), "Roster saved");

        // 3. Tell the user, then publish
        self.notifier.notify("Saved");

        let event = RosterSaved {
            event_id: EventId::new(),
            roster_key: self.store.key().to_string(),
            name_count: roster.len(),
            saved_at: Timestamp::now(),
        };
        publish_or_warn(self.event_publisher.as_ref(), &event).await;

        Ok(SaveRosterResult { roster, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryEventBus, InMemoryNotifier, InMemoryRosterStore};

    struct Fixture {
        handler: SaveRosterHandler,
        store: Arc<InMemoryRosterStore>,
        notifier: Arc<InMemoryNotifier>,
        bus: Arc<InMemoryEventBus>,
    }

    fn fixture_with(store: InMemoryRosterStore, bus: InMemoryEventBus) -> Fixture {
        let store = Arc::new(store);
        let notifier = Arc::new(InMemoryNotifier::new());
        let bus = Arc::new(bus);
        Fixture {
            handler: SaveRosterHandler::new(store.clone(), notifier.clone(), bus.clone()),
            store,
            notifier,
            bus,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(
            InMemoryRosterStore::new("iwmi_team_members"),
            InMemoryEventBus::new(),
        )
    }

    fn cmd(text: &str) -> SaveRosterCommand {
        SaveRosterCommand {
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn saves_parsed_lines() {
        let f = fixture();

        let result = f.handler.handle(cmd("  Alice \n\nBob\r\n Charlie")).await.unwrap();

        assert_eq!(result.roster.names(), ["Alice", "Bob", "Charlie"]);
        assert_eq!(
            f.store.raw().await.as_deref(),
            Some(r#"["Alice","Bob","Charlie"]"#)
        );
        assert_eq!(f.notifier.last().as_deref(), Some("Saved"));
    }

    #[tokio::test]
    async fn publishes_roster_saved_event() {
        let f = fixture();

        let result = f.handler.handle(cmd("Alice\nBob")).await.unwrap();

        let events = f.bus.events_of_type("roster.saved.v1");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].aggregate_id, "iwmi_team_members");
        assert_eq!(events[0].payload["name_count"], 2);
        assert_eq!(result.event.name_count, 2);
    }

    #[tokio::test]
    async fn saving_blank_text_removes_the_record() {
        let f = fixture();
        f.store.put_raw(r#"["Alice"]"#).await;

        let result = f.handler.handle(cmd("   \n\n")).await.unwrap();

        assert!(result.roster.is_empty());
        assert_eq!(f.store.raw().await, None);
    }

    #[tokio::test]
    async fn fails_when_store_unavailable() {
        let f = fixture_with(
            InMemoryRosterStore::unavailable("iwmi_team_members"),
            InMemoryEventBus::new(),
        );

        let result = f.handler.handle(cmd("Alice")).await;

        assert!(matches!(result, Err(RosterError::Storage(_))));
        assert!(f.notifier.messages().is_empty());
        assert_eq!(f.bus.event_count(), 0);
    }

    #[tokio::test]
    async fn publish_failure_does_not_fail_the_save() {
        let f = fixture_with(
            InMemoryRosterStore::new("iwmi_team_members"),
            InMemoryEventBus::failing(),
        );

        let result = f.handler.handle(cmd("Alice")).await;

        assert!(result.is_ok());
        assert_eq!(f.store.raw().await.as_deref(), Some(r#"["Alice"]"#));
    }
}
