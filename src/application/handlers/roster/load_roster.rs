//! LoadRosterHandler - Query handler for reading the stored roster.

use std::sync::Arc;

use tracing::warn;

use crate::domain::roster::Roster;
use crate::ports::RosterStore;

/// Query for the stored roster.
#[derive(Debug, Clone, Default)]
pub struct LoadRosterQuery;

pub struct LoadRosterHandler {
    store: Arc<dyn RosterStore>,
}

impl LoadRosterHandler {
    pub fn new(store: Arc<dyn RosterStore>) -> Self {
        Self { store }
    }

    /// Never fails: unreadable or malformed storage yields an empty roster.
    pub async fn handle(&self, _query: LoadRosterQuery) -> Roster {
        match self.store.load().await {
            Ok(roster) => roster,
            Err(e) => {
                warn!(key = self.store.key(), error = %e, "Roster unavailable, starting empty");
                Roster::empty()
            }
        }
    }
}
