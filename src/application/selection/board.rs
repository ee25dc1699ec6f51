//! State shared between the controller and its timer tasks.

use std::sync::Arc;

use rand::rngs::StdRng;
use tokio::sync::{watch, Mutex, MutexGuard};
use tracing::warn;

use super::orchestrator::TimerOrchestrator;
use super::schedule::DrawSchedule;
use crate::domain::foundation::SerializableDomainEvent;
use crate::domain::selection::{Generation, SelectionSession, SelectionSnapshot};
use crate::ports::EventPublisher;

/// Everything a timer callback may touch, guarded by one lock.
pub(crate) struct DrawBoard {
    /// Current generation. Callbacks holding any other value are stale.
    pub(crate) generation: Generation,
    pub(crate) session: SelectionSession,
    pub(crate) timers: TimerOrchestrator,
    pub(crate) rng: StdRng,
}

impl DrawBoard {
    pub(crate) fn new(rng: StdRng) -> Self {
        let generation = Generation::initial();
        Self {
            generation,
            session: SelectionSession::idle(generation),
            timers: TimerOrchestrator::new(),
            rng,
        }
    }

    /// The session, if `generation` still owns a running draw.
    pub(crate) fn live_session(&mut self, generation: Generation) -> Option<&mut SelectionSession> {
        if self.generation == generation && self.session.is_live(generation) {
            Some(&mut self.session)
        } else {
            None
        }
    }
}

pub(crate) struct DrawShared {
    board: Mutex<DrawBoard>,
    snapshots: watch::Sender<SelectionSnapshot>,
    publisher: Arc<dyn EventPublisher>,
    schedule: DrawSchedule,
}

impl DrawShared {
    pub(crate) fn new(
        rng: StdRng,
        publisher: Arc<dyn EventPublisher>,
        schedule: DrawSchedule,
    ) -> Self {
        let board = DrawBoard::new(rng);
        let (snapshots, _) = watch::channel(board.session.snapshot());
        Self {
            board: Mutex::new(board),
            snapshots,
            publisher,
            schedule,
        }
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, DrawBoard> {
        self.board.lock().await
    }

    pub(crate) fn try_lock(&self) -> Option<MutexGuard<'_, DrawBoard>> {
        self.board.try_lock().ok()
    }

    pub(crate) fn schedule(&self) -> DrawSchedule {
        self.schedule
    }

    /// Pushes the board's current snapshot to every subscriber.
    pub(crate) fn broadcast(&self, board: &DrawBoard) {
        self.snapshots.send_replace(board.session.snapshot());
    }

    pub(crate) fn latest(&self) -> SelectionSnapshot {
        self.snapshots.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<SelectionSnapshot> {
        self.snapshots.subscribe()
    }

    /// Publishes an event. Delivery failures are logged, never surfaced.
    pub(crate) async fn publish<E: SerializableDomainEvent + Sync>(&self, event: &E) {
        let envelope = event.to_envelope();
        let event_type = envelope.event_type.clone();
        if let Err(e) = self.publisher.publish(envelope).await {
            warn!(event_type = %event_type, error = %e, "Failed to publish event");
        }
    }
}
