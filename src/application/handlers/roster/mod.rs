//! Roster command and query handlers.

mod clear_roster;
mod load_roster;
mod save_roster;
mod sort_roster;

pub use clear_roster::{ClearRosterCommand, ClearRosterHandler, ClearRosterResult};
pub use load_roster::{LoadRosterHandler, LoadRosterQuery};
pub use save_roster::{SaveRosterCommand, SaveRosterHandler, SaveRosterResult};
pub use sort_roster::{SortRosterCommand, SortRosterHandler, SortRosterResult};

use tracing::warn;

use crate::domain::foundation::SerializableDomainEvent;
use crate::ports::EventPublisher;

/// Roster changes are already persisted when their event goes out, so a
/// failed publish is logged and the command still succeeds.
async fn publish_or_warn<E: SerializableDomainEvent + Sync>(
    publisher: &dyn EventPublisher,
    event: &E,
) {
    let envelope = event.to_envelope();
    let event_type = envelope.event_type.clone();
    if let Err(e) = publisher.publish(envelope).await {
        warn!(event_type = %event_type, error = %e, "Failed to publish roster event");
    }
}
