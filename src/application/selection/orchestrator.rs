//! TimerOrchestrator - Owns the three timers of a draw.
//!
//! A draw runs three tasks against the shared board:
//!
//! | Task | Period | Effect |
//! |------|--------|--------|
//! | countdown | `countdown_tick` | decrements `remaining_seconds`, stops at 0 |
//! | highlight | `highlight_interval` | picks 3 distinct candidate indices |
//! | terminal | once, `reveal_after` | stops the other two, draws and reveals |
//!
//! Every callback re-checks the generation it was spawned with under the
//! board lock, so a callback that fires after its draw was cancelled or
//! replaced observes nothing and mutates nothing.
//!
//! ## Lifecycle
//!
//! ```text
//! Armed ──arm──► Ticking ──complete/disarm──► Stopped
//!   └────────────disarm─────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info, trace, warn};

use super::board::{DrawBoard, DrawShared};
use crate::domain::foundation::{EventId, StateMachine, Timestamp, ValidationError};
use crate::domain::selection::{
    distinct_indices, draw_winners, Generation, SelectionRevealed, ROLE_COUNT,
};

/// Lifecycle of one draw's timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Created, nothing scheduled yet.
    Armed,
    /// Countdown, highlight and terminal timers are scheduled.
    Ticking,
    /// All timers are cancelled or have fired.
    Stopped,
}

impl StateMachine for TimerState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use TimerState::*;
        matches!(
            (self, target),
            (Armed, Ticking) | (Armed, Stopped) | (Ticking, Stopped)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use TimerState::*;
        match self {
            Armed => vec![Ticking, Stopped],
            Ticking => vec![Stopped],
            Stopped => vec![],
        }
    }
}

/// Handles to the timers of a single draw.
///
/// Dropping the orchestrator aborts anything still scheduled.
#[derive(Debug)]
pub struct TimerOrchestrator {
    state: TimerState,
    countdown: Option<JoinHandle<()>>,
    highlight: Option<JoinHandle<()>>,
    terminal: Option<JoinHandle<()>>,
}

impl TimerOrchestrator {
    pub fn new() -> Self {
        Self {
            state: TimerState::Armed,
            countdown: None,
            highlight: None,
            terminal: None,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Schedules the three timers for `generation`, measured from now.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the timers were already armed or stopped.
    pub(crate) fn arm(
        &mut self,
        shared: &Arc<DrawShared>,
        generation: Generation,
    ) -> Result<(), ValidationError> {
        let next = self.state.transition_to(TimerState::Ticking)?;
        let start = Instant::now();

        self.countdown = Some(tokio::spawn(run_countdown(
            Arc::clone(shared),
            generation,
            start,
        )));
        self.highlight = Some(tokio::spawn(run_highlight(
            Arc::clone(shared),
            generation,
            start,
        )));
        self.terminal = Some(tokio::spawn(run_terminal(
            Arc::clone(shared),
            generation,
            start,
        )));
        self.state = next;

        debug!(generation = %generation, "Draw timers armed");
        Ok(())
    }

    /// Cancels every timer. Idempotent.
    pub fn disarm(&mut self) {
        self.stop_ticking();
        if let Some(terminal) = self.terminal.take() {
            terminal.abort();
        }
        self.state = TimerState::Stopped;
    }

    /// Called by the terminal task once it has fired.
    ///
    /// The terminal handle is released rather than aborted since the
    /// calling task still has work to finish.
    fn complete(&mut self) {
        self.stop_ticking();
        self.terminal = None;
        self.state = TimerState::Stopped;
    }

    fn stop_ticking(&mut self) {
        for handle in [self.countdown.take(), self.highlight.take()]
            .into_iter()
            .flatten()
        {
            handle.abort();
        }
    }
}

impl Default for TimerOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TimerOrchestrator {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// What a periodic timer callback did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session was updated and the timer keeps running.
    Applied,
    /// The session was updated and the timer is done.
    Finished,
    /// The callback belonged to a cancelled or superseded draw.
    Stale,
}

impl TickOutcome {
    fn keeps_running(self) -> bool {
        self == TickOutcome::Applied
    }
}

/// One countdown tick against the board.
pub(crate) fn countdown_step(board: &mut DrawBoard, generation: Generation) -> TickOutcome {
    let Some(session) = board.live_session(generation) else {
        trace!(generation = %generation, "Stale countdown tick ignored");
        return TickOutcome::Stale;
    };

    match session.tick_countdown() {
        Ok(0) => {
            debug!(generation = %generation, "Countdown reached zero");
            TickOutcome::Finished
        }
        Ok(_) => TickOutcome::Applied,
        Err(e) => {
            warn!(error = %e, "Countdown tick rejected");
            TickOutcome::Stale
        }
    }
}

/// One highlight tick against the board.
pub(crate) fn highlight_step(board: &mut DrawBoard, generation: Generation) -> TickOutcome {
    if board.live_session(generation).is_none() {
        trace!(generation = %generation, "Stale highlight tick ignored");
        return TickOutcome::Stale;
    }

    let indices = distinct_indices(&mut board.rng, board.session.candidates().len(), ROLE_COUNT);
    match board.session.set_highlighted(indices) {
        Ok(()) => TickOutcome::Applied,
        Err(e) => {
            warn!(error = %e, "Highlight rejected");
            TickOutcome::Stale
        }
    }
}

async fn run_countdown(shared: Arc<DrawShared>, generation: Generation, start: Instant) {
    let period = shared.schedule().countdown_tick;
    let mut ticks = time::interval_at(start + period, period);

    loop {
        ticks.tick().await;

        let mut board = shared.lock().await;
        let outcome = countdown_step(&mut board, generation);
        if outcome != TickOutcome::Stale {
            shared.broadcast(&board);
        }
        if !outcome.keeps_running() {
            return;
        }
    }
}

async fn run_highlight(shared: Arc<DrawShared>, generation: Generation, start: Instant) {
    let period = shared.schedule().highlight_interval;
    let mut ticks = time::interval_at(start + period, period);

    loop {
        ticks.tick().await;

        let mut board = shared.lock().await;
        let outcome = highlight_step(&mut board, generation);
        if outcome != TickOutcome::Stale {
            shared.broadcast(&board);
        }
        if !outcome.keeps_running() {
            return;
        }
    }
}

async fn run_terminal(shared: Arc<DrawShared>, generation: Generation, start: Instant) {
    time::sleep_until(start + shared.schedule().reveal_after).await;

    let revealed = {
        let mut guard = shared.lock().await;
        let board = &mut *guard;
        if board.live_session(generation).is_none() {
            trace!(generation = %generation, "Stale reveal ignored");
            return;
        }

        // Countdown and highlight stop before the winners are drawn.
        board.timers.complete();

        let outcome = draw_winners(&mut board.rng, board.session.candidates())
            .and_then(|winners| board.session.reveal(winners));
        if let Err(e) = outcome {
            warn!(error = %e, "Reveal failed, returning to idle");
            board.generation = board.generation.next();
            board.session.cancel(board.generation);
            shared.broadcast(board);
            return;
        }
        shared.broadcast(board);

        let snapshot = board.session.snapshot();
        match snapshot.draw_id {
            Some(draw_id) => SelectionRevealed {
                event_id: EventId::new(),
                draw_id,
                generation,
                winners: snapshot.winners,
                revealed_at: Timestamp::now(),
            },
            None => return,
        }
    };

    info!(
        draw_id = %revealed.draw_id,
        generation = %generation,
        "Winners revealed"
    );
    shared.publish(&revealed).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DrawId;
    use crate::domain::selection::SelectionSession;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn timer_state_transitions() {
        assert!(TimerState::Armed.can_transition_to(&TimerState::Ticking));
        assert!(TimerState::Armed.can_transition_to(&TimerState::Stopped));
        assert!(TimerState::Ticking.can_transition_to(&TimerState::Stopped));
        assert!(!TimerState::Ticking.can_transition_to(&TimerState::Armed));
        assert!(TimerState::Stopped.is_terminal());
    }

    #[test]
    fn disarm_is_idempotent() {
        let mut timers = TimerOrchestrator::new();
        timers.disarm();
        timers.disarm();
        assert_eq!(timers.state(), TimerState::Stopped);
    }

    fn selecting_board(names: &[&str]) -> (DrawBoard, Generation) {
        let mut board = DrawBoard::new(StdRng::seed_from_u64(11));
        let generation = board.generation.next();
        board.generation = generation;
        board.session = SelectionSession::start(
            DrawId::new(),
            generation,
            names.iter().map(|n| n.to_string()).collect(),
            2,
        )
        .unwrap();
        (board, generation)
    }

    #[test]
    fn countdown_step_finishes_at_zero() {
        let (mut board, generation) = selecting_board(&["Alice", "Bob", "Charlie"]);

        assert_eq!(countdown_step(&mut board, generation), TickOutcome::Applied);
        assert_eq!(board.session.remaining_seconds(), 1);
        assert_eq!(countdown_step(&mut board, generation), TickOutcome::Finished);
        assert_eq!(board.session.remaining_seconds(), 0);
    }

    #[test]
    fn steps_for_an_old_generation_are_stale() {
        let (mut board, generation) = selecting_board(&["Alice", "Bob", "Charlie", "Dana"]);
        let before = board.session.clone();
        let old = Generation::initial();
        assert_ne!(old, generation);

        assert_eq!(countdown_step(&mut board, old), TickOutcome::Stale);
        assert_eq!(highlight_step(&mut board, old), TickOutcome::Stale);
        assert_eq!(board.session, before);
    }

    #[test]
    fn highlight_step_picks_three_distinct_in_range() {
        let (mut board, generation) = selecting_board(&["Alice", "Bob", "Charlie", "Dana", "Eve"]);

        for _ in 0..50 {
            assert_eq!(highlight_step(&mut board, generation), TickOutcome::Applied);
            let highlighted = board.session.highlighted();
            assert_eq!(highlighted.len(), 3);
            assert!(highlighted.iter().all(|&i| i < 5));
        }
    }

    #[test]
    fn steps_after_cancel_are_stale() {
        let (mut board, generation) = selecting_board(&["Alice", "Bob", "Charlie"]);
        board.generation = board.generation.next();
        board.session.cancel(board.generation);

        assert_eq!(countdown_step(&mut board, generation), TickOutcome::Stale);
        assert_eq!(highlight_step(&mut board, generation), TickOutcome::Stale);
        assert!(board.session.highlighted().is_empty());
    }

    #[test]
    fn new_orchestrator_is_armed() {
        assert_eq!(TimerOrchestrator::default().state(), TimerState::Armed);
    }
}
