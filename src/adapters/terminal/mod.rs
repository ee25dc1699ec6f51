//! Terminal presentation of rosters and draws.

mod render;

pub use render::{render_roster, render_snapshot};
