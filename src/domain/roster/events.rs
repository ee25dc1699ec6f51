//! Roster domain events.
//!
//! - `RosterSaved` - Roster replaced from editor text
//! - `RosterSorted` - Roster re-ordered A-Z
//! - `RosterCleared` - Roster emptied

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, Timestamp};

/// Published when the editor saves the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSaved {
    pub event_id: EventId,

    /// Storage key of the roster record.
    pub roster_key: String,

    /// Number of names saved.
    pub name_count: usize,

    pub saved_at: Timestamp,
}

domain_event!(
    RosterSaved,
    event_type = "roster.saved.v1",
    aggregate_id = roster_key,
    aggregate_type = "Roster",
    occurred_at = saved_at,
    event_id = event_id
);

/// Published when the roster is sorted A-Z.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSorted {
    pub event_id: EventId,
    pub roster_key: String,
    pub name_count: usize,
    pub sorted_at: Timestamp,
}

domain_event!(
    RosterSorted,
    event_type = "roster.sorted.v1",
    aggregate_id = roster_key,
    aggregate_type = "Roster",
    occurred_at = sorted_at,
    event_id = event_id
);

/// Published when the roster is cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterCleared {
    pub event_id: EventId,
    pub roster_key: String,

    /// Whether an active selection was cancelled along with the roster.
    pub cancelled_selection: bool,

    pub cleared_at: Timestamp,
}

domain_event!(
    RosterCleared,
    event_type = "roster.cleared.v1",
    aggregate_id = roster_key,
    aggregate_type = "Roster",
    occurred_at = cleared_at,
    event_id = event_id
);
