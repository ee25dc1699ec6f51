//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, events, errors)
//! - `roster` - The persisted list of team members
//! - `selection` - The timed random draw: session, sampler, roles, events

pub mod foundation;
pub mod roster;
pub mod selection;
