//! Selection draw orchestration.
//!
//! `SelectionController` is the entry point; `TimerOrchestrator` owns the
//! countdown, highlight and terminal timers of the running draw.

mod board;
mod controller;
mod orchestrator;
mod schedule;

pub use controller::SelectionController;
pub use orchestrator::{TickOutcome, TimerOrchestrator, TimerState};
pub use schedule::{DrawSchedule, SelectionConfig};
