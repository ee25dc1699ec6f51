//! Application handlers.
//!
//! Command and query handlers for the roster editor.

pub mod roster;

pub use roster::{
    ClearRosterCommand, ClearRosterHandler, ClearRosterResult, LoadRosterHandler,
    LoadRosterQuery, SaveRosterCommand, SaveRosterHandler, SaveRosterResult, SortRosterCommand,
    SortRosterHandler, SortRosterResult,
};
