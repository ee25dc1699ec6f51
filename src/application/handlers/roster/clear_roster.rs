//! ClearRosterHandler - Command handler for clearing the roster.
//!
//! Clearing also cancels any running draw, since its candidates came from
//! the roster being discarded.

use std::sync::Arc;

use tracing::{debug, info};

use super::publish_or_warn;
use crate::application::selection::SelectionController;
use crate::domain::foundation::{EventId, Timestamp};
use crate::domain::roster::{Roster, RosterCleared, RosterError};
use crate::domain::selection::CancelReason;
use crate::ports::{EventPublisher, Notifier, RosterStore};

/// Command to clear the roster.
#[derive(Debug, Clone)]
pub struct ClearRosterCommand {
    /// Text currently in the editor.
    pub text: String,

    /// The user confirmed the clear.
    pub confirmed: bool,
}

#[derive(Debug, Clone)]
pub enum ClearRosterResult {
    /// Neither the editor nor storage held any names.
    NothingToClear,
    Cleared(RosterCleared),
}

pub struct ClearRosterHandler {
    store: Arc<dyn RosterStore>,
    notifier: Arc<dyn Notifier>,
    event_publisher: Arc<dyn EventPublisher>,
    selection: Arc<SelectionController>,
}

impl ClearRosterHandler {
    pub fn new(
        store: Arc<dyn RosterStore>,
        notifier: Arc<dyn Notifier>,
        event_publisher: Arc<dyn EventPublisher>,
        selection: Arc<SelectionController>,
    ) -> Self {
        Self {
            store,
            notifier,
            event_publisher,
            selection,
        }
    }

    pub async fn handle(&self, cmd: ClearRosterCommand) -> Result<ClearRosterResult, RosterError> {
        // 1. Nothing to do if both the editor and storage are empty.
        //    An unreadable store counts as possibly holding names.
        let stored_empty = matches!(self.store.load().await, Ok(roster) if roster.is_empty());
        let draw_active = self.selection.snapshot().phase.is_active();
        if Roster::parse(&cmd.text).is_empty() && stored_empty && !draw_active {
            debug!("Clear requested with nothing to clear");
            return Ok(ClearRosterResult::NothingToClear);
        }

        // 2. Require confirmation
        if !cmd.confirmed {
            return Err(RosterError::ConfirmationRequired);
        }

        // 3. Cancel the draw, then wipe storage
        let cancelled_selection = self
            .selection
            .cancel_with_reason(CancelReason::RosterCleared)
            .await;
        self.store.clear().await?;
        info!(cancelled_selection, "Roster cleared");

        self.notifier.notify("Cleared");

        let event = RosterCleared {
            event_id: EventId::new(),
            roster_key: self.store.key().to_string(),
            cancelled_selection,
            cleared_at: Timestamp::now(),
        };
        publish_or_warn(self.event_publisher.as_ref(), &event).await;

        Ok(ClearRosterResult::Cleared(event))
    }
}
