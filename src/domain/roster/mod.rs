//! Roster domain module.
//!
//! The roster is the persisted list of team members a draw samples from.
//!
//! # Events
//!
//! - `RosterSaved` - Published when the editor saves the roster
//! - `RosterSorted` - Published when the roster is sorted A-Z
//! - `RosterCleared` - Published when the roster is cleared

mod errors;
mod events;
mod roster;

pub use errors::RosterError;
pub use events::{RosterCleared, RosterSaved, RosterSorted};
pub use roster::Roster;
