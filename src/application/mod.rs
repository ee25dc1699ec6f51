//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Roster editing goes through command handlers; draws go through the
//! `SelectionController`.

pub mod handlers;
pub mod selection;

pub use handlers::{
    ClearRosterCommand, ClearRosterHandler, ClearRosterResult, LoadRosterHandler,
    LoadRosterQuery, SaveRosterCommand, SaveRosterHandler, SaveRosterResult, SortRosterCommand,
    SortRosterHandler, SortRosterResult,
};
pub use selection::{
    DrawSchedule, SelectionConfig, SelectionController, TickOutcome, TimerOrchestrator,
    TimerState,
};
