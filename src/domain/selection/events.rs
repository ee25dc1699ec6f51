//! Selection domain events.
//!
//! - `SelectionStarted` - A draw began ticking
//! - `SelectionRevealed` - The terminal timer resolved the winners
//! - `SelectionCancelled` - A draw was stopped before or after its reveal

use serde::{Deserialize, Serialize};

use super::{Generation, RoleAssignment};
use crate::domain::foundation::{domain_event, DrawId, EventId, Timestamp};

/// Published when a new draw starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionStarted {
    pub event_id: EventId,
    pub draw_id: DrawId,
    pub generation: Generation,

    /// Size of the frozen candidate list.
    pub candidate_count: usize,

    pub started_at: Timestamp,
}

domain_event!(
    SelectionStarted,
    event_type = "selection.started.v1",
    aggregate_id = draw_id,
    aggregate_type = "Selection",
    occurred_at = started_at,
    event_id = event_id
);

/// Published when the winners are revealed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRevealed {
    pub event_id: EventId,
    pub draw_id: DrawId,
    pub generation: Generation,
    pub winners: Vec<RoleAssignment>,
    pub revealed_at: Timestamp,
}

domain_event!(
    SelectionRevealed,
    event_type = "selection.revealed.v1",
    aggregate_id = draw_id,
    aggregate_type = "Selection",
    occurred_at = revealed_at,
    event_id = event_id
);

/// Why a draw was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// The user asked to stop.
    Explicit,
    /// A newer draw replaced this one.
    Superseded,
    /// The roster was cleared.
    RosterCleared,
}

/// Published when an active draw is cancelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionCancelled {
    pub event_id: EventId,
    pub draw_id: DrawId,
    pub reason: CancelReason,
    pub cancelled_at: Timestamp,
}

domain_event!(
    SelectionCancelled,
    event_type = "selection.cancelled.v1",
    aggregate_id = draw_id,
    aggregate_type = "Selection",
    occurred_at = cancelled_at,
    event_id = event_id
);
