//! Selection session entity.
//!
//! One session represents one draw, from start to reveal or cancellation.
//! The session owns a frozen copy of the roster so edits made while a draw
//! is running cannot change who is eligible.

use std::collections::BTreeSet;

use super::{
    Generation, SelectionError, SelectionPhase, SelectionSnapshot, Winners, ROLE_COUNT,
};
use crate::domain::foundation::{DrawId, StateMachine, Timestamp};

/// State of a single draw.
///
/// # Invariants
///
/// - `candidates.len() >= 3` whenever `phase != Idle`
/// - `highlighted` indices are distinct and `< candidates.len()`
/// - `highlighted` is empty unless `phase == Selecting`
/// - `winners` is `Some` exactly when `phase == Revealed`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSession {
    draw_id: Option<DrawId>,
    generation: Generation,
    phase: SelectionPhase,
    candidates: Vec<String>,
    remaining_seconds: u32,
    highlighted: BTreeSet<usize>,
    winners: Option<Winners>,
    started_at: Option<Timestamp>,
}

impl SelectionSession {
    /// An idle session with nothing drawn.
    pub fn idle(generation: Generation) -> Self {
        Self {
            draw_id: None,
            generation,
            phase: SelectionPhase::Idle,
            candidates: Vec::new(),
            remaining_seconds: 0,
            highlighted: BTreeSet::new(),
            winners: None,
            started_at: None,
        }
    }

    /// Starts a new draw over a snapshot of the roster.
    ///
    /// # Errors
    ///
    /// - `InsufficientCandidates` if fewer than three names are given
    pub fn start(
        draw_id: DrawId,
        generation: Generation,
        candidates: Vec<String>,
        countdown_secs: u32,
    ) -> Result<Self, SelectionError> {
        if candidates.len() < ROLE_COUNT {
            return Err(SelectionError::insufficient_candidates(candidates.len()));
        }

        Ok(Self {
            draw_id: Some(draw_id),
            generation,
            phase: SelectionPhase::Selecting,
            candidates,
            remaining_seconds: countdown_secs,
            highlighted: BTreeSet::new(),
            winners: None,
            started_at: Some(Timestamp::now()),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn draw_id(&self) -> Option<DrawId> {
        self.draw_id
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn highlighted(&self) -> &BTreeSet<usize> {
        &self.highlighted
    }

    pub fn winners(&self) -> Option<&Winners> {
        self.winners.as_ref()
    }

    pub fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    /// Returns true while selecting or revealed.
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Returns true if this session belongs to `generation` and is still drawing.
    pub fn is_live(&self, generation: Generation) -> bool {
        self.generation == generation && self.phase == SelectionPhase::Selecting
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Decrements the countdown by one second, floored at zero.
    ///
    /// Returns the remaining seconds.
    ///
    /// # Errors
    ///
    /// - `NotSelecting` outside the `Selecting` phase
    pub fn tick_countdown(&mut self) -> Result<u32, SelectionError> {
        self.ensure_selecting()?;
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        Ok(self.remaining_seconds)
    }

    /// Replaces the highlighted candidate indices.
    ///
    /// # Errors
    ///
    /// - `NotSelecting` outside the `Selecting` phase
    /// - `IndexOutOfRange` if any index is past the end of `candidates`
    pub fn set_highlighted(&mut self, indices: BTreeSet<usize>) -> Result<(), SelectionError> {
        self.ensure_selecting()?;
        let len = self.candidates.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(SelectionError::IndexOutOfRange { index, len });
        }
        self.highlighted = indices;
        Ok(())
    }

    /// Freezes the session with its winners.
    ///
    /// The countdown is forced to zero and the highlight cleared.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the session is `Selecting`
    pub fn reveal(&mut self, winners: Winners) -> Result<(), SelectionError> {
        self.phase = self.transition(SelectionPhase::Revealed)?;
        self.remaining_seconds = 0;
        self.highlighted.clear();
        self.winners = Some(winners);
        Ok(())
    }

    /// Returns the session to `Idle` under a new generation.
    ///
    /// Returns `false` (and changes nothing) if the session was already idle.
    pub fn cancel(&mut self, generation: Generation) -> bool {
        if self.transition(SelectionPhase::Idle).is_err() {
            return false;
        }
        *self = Self::idle(generation);
        true
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> SelectionSnapshot {
        let selecting = self.phase == SelectionPhase::Selecting;
        SelectionSnapshot {
            generation: self.generation,
            draw_id: self.draw_id,
            phase: self.phase,
            remaining_seconds: self.remaining_seconds,
            highlighted: if selecting {
                self.highlighted.iter().copied().collect()
            } else {
                Vec::new()
            },
            candidates: if selecting {
                self.candidates.clone()
            } else {
                Vec::new()
            },
            winners: self
                .winners
                .as_ref()
                .map(Winners::assignments)
                .unwrap_or_default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_selecting(&self) -> Result<(), SelectionError> {
        if self.phase == SelectionPhase::Selecting {
            Ok(())
        } else {
            Err(SelectionError::NotSelecting(self.phase))
        }
    }

    fn transition(&self, to: SelectionPhase) -> Result<SelectionPhase, SelectionError> {
        self.phase
            .transition_to(to)
            .map_err(|_| SelectionError::InvalidTransition {
                from: self.phase,
                to,
            })
    }
}

impl Default for SelectionSession {
    fn default() -> Self {
        Self::idle(Generation::initial())
    }
}
