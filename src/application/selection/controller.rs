//! SelectionController - Entry point for starting and cancelling draws.
//!
//! The controller validates the candidate list, tears down any previous draw,
//! and hands a fresh session to a new `TimerOrchestrator`. Observers follow
//! progress through `subscribe()`; every mutation pushes a new snapshot.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::board::{DrawBoard, DrawShared};
use super::orchestrator::{TimerOrchestrator, TimerState};
use super::schedule::SelectionConfig;
use crate::domain::foundation::{DrawId, EventId, Timestamp};
use crate::domain::roster::Roster;
use crate::domain::selection::{
    CancelReason, SelectionCancelled, SelectionError, SelectionSession, SelectionSnapshot,
    SelectionStarted, ROLE_COUNT,
};
use crate::ports::{EventPublisher, Notifier, RosterStore};

/// Runs at most one draw at a time.
pub struct SelectionController {
    shared: Arc<DrawShared>,
    store: Arc<dyn RosterStore>,
    notifier: Arc<dyn Notifier>,
}

impl SelectionController {
    /// Create a controller with default timing and an entropy-seeded RNG.
    pub fn new(
        store: Arc<dyn RosterStore>,
        notifier: Arc<dyn Notifier>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self::with_config(store, notifier, publisher, SelectionConfig::default())
    }

    /// Create a controller with custom timing and seeding.
    pub fn with_config(
        store: Arc<dyn RosterStore>,
        notifier: Arc<dyn Notifier>,
        publisher: Arc<dyn EventPublisher>,
        config: SelectionConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            shared: Arc::new(DrawShared::new(rng, publisher, config.schedule)),
            store,
            notifier,
        }
    }

    /// Starts a draw over `names`.
    ///
    /// Any running draw is cancelled first. The names are normalized
    /// (trimmed, blanks dropped), persisted, and frozen as the candidates.
    ///
    /// # Errors
    ///
    /// - `InsufficientCandidates` if fewer than three names remain. The user
    ///   is notified and nothing else changes.
    pub async fn start<I, S>(&self, names: I) -> Result<SelectionSnapshot, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roster = Roster::from_names(names);
        if roster.len() < ROLE_COUNT {
            let err = SelectionError::insufficient_candidates(roster.len());
            info!(candidates = roster.len(), "Selection not started");
            self.notifier.notify(&err.user_message());
            return Err(err);
        }

        // The previous draw's timers stop before anything is awaited.
        let mut superseded: Vec<SelectionCancelled> = {
            let mut guard = self.shared.lock().await;
            let cancelled = stop_active(&mut guard, CancelReason::Superseded);
            if cancelled.is_some() {
                self.shared.broadcast(&guard);
            }
            cancelled.into_iter().collect()
        };

        if let Err(e) = self.store.save(&roster).await {
            warn!(error = %e, "Failed to persist roster before draw, continuing");
        }

        let draw_id = DrawId::new();
        let (started, snapshot) = {
            let mut guard = self.shared.lock().await;
            let board = &mut *guard;

            // A concurrent start may have armed a draw while the roster was saved.
            superseded.extend(stop_active(board, CancelReason::Superseded));

            let generation = board.generation.next();
            let session = SelectionSession::start(
                draw_id,
                generation,
                roster.into_names(),
                self.shared.schedule().countdown_secs,
            )?;
            let candidate_count = session.candidates().len();

            board.generation = generation;
            board.session = session;
            board.timers = TimerOrchestrator::new();
            if let Err(e) = board.timers.arm(&self.shared, generation) {
                warn!(error = %e, "Fresh timers refused to arm");
            }
            self.shared.broadcast(board);

            let started = SelectionStarted {
                event_id: EventId::new(),
                draw_id,
                generation,
                candidate_count,
                started_at: Timestamp::now(),
            };
            (started, board.session.snapshot())
        };

        for cancelled in &superseded {
            self.shared.publish(cancelled).await;
        }
        info!(
            draw_id = %draw_id,
            generation = %started.generation,
            candidates = started.candidate_count,
            "Selection started"
        );
        self.shared.publish(&started).await;

        Ok(snapshot)
    }

    /// Stops the current draw and returns to idle.
    ///
    /// Returns `false` if nothing was running. Calling it again is a no-op.
    pub async fn cancel(&self) -> bool {
        self.cancel_with_reason(CancelReason::Explicit).await
    }

    pub async fn cancel_with_reason(&self, reason: CancelReason) -> bool {
        let cancelled = {
            let mut guard = self.shared.lock().await;
            let cancelled = stop_active(&mut guard, reason);
            if cancelled.is_some() {
                self.shared.broadcast(&guard);
            }
            cancelled
        };

        match cancelled {
            Some(event) => {
                info!(draw_id = %event.draw_id, reason = ?reason, "Selection cancelled");
                self.shared.publish(&event).await;
                true
            }
            None => {
                debug!("Cancel requested with no active selection");
                false
            }
        }
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> SelectionSnapshot {
        self.shared.latest()
    }

    /// Receiver that observes every snapshot from now on.
    pub fn subscribe(&self) -> watch::Receiver<SelectionSnapshot> {
        self.shared.subscribe()
    }

    /// Lifecycle state of the current draw's timers.
    pub async fn timer_state(&self) -> TimerState {
        self.shared.lock().await.timers.state()
    }
}

impl Drop for SelectionController {
    fn drop(&mut self) {
        if let Some(mut board) = self.shared.try_lock() {
            board.timers.disarm();
        }
    }
}

/// Disarms the timers and, if a draw was active, resets it under a new
/// generation.
fn stop_active(board: &mut DrawBoard, reason: CancelReason) -> Option<SelectionCancelled> {
    board.timers.disarm();

    let draw_id = board.session.draw_id()?;
    let generation = board.generation.next();
    if !board.session.cancel(generation) {
        return None;
    }
    board.generation = generation;

    Some(SelectionCancelled {
        event_id: EventId::new(),
        draw_id,
        reason,
        cancelled_at: Timestamp::now(),
    })
}
