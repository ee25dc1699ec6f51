//! Selection domain module.
//!
//! A selection (or draw) freezes the roster, animates a rotating highlight
//! while counting down, and finally assigns three distinct names to the
//! three presentation roles.
//!
//! # Events
//!
//! - `SelectionStarted` - Published when a draw starts
//! - `SelectionRevealed` - Published when winners are assigned
//! - `SelectionCancelled` - Published when an active draw is cancelled

mod errors;
mod events;
mod generation;
mod phase;
mod role;
pub mod sampler;
mod session;
mod snapshot;
mod winners;

pub use errors::SelectionError;
pub use events::{CancelReason, SelectionCancelled, SelectionRevealed, SelectionStarted};
pub use generation::Generation;
pub use phase::SelectionPhase;
pub use role::{Role, RoleAssignment, ROLE_COUNT};
pub use sampler::{distinct_indices, draw_ranked, draw_winners};
pub use session::SelectionSession;
pub use snapshot::{SelectionSnapshot, WINNER_PLACEHOLDER};
pub use winners::Winners;
