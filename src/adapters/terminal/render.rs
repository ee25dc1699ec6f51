//! Plain-text rendering of selection snapshots and rosters.

use std::fmt::Write;

use crate::domain::roster::Roster;
use crate::domain::selection::{Role, SelectionPhase, SelectionSnapshot};

/// Renders a snapshot as the CLI shows it.
///
/// - Idle: a one-line hint
/// - Selecting: the countdown followed by every candidate, highlighted ones marked
/// - Revealed: one line per role
pub fn render_snapshot(snapshot: &SelectionSnapshot) -> String {
    let mut out = String::new();
    match snapshot.phase {
        SelectionPhase::Idle => {
            out.push_str("No selection running.\n");
        }
        SelectionPhase::Selecting => {
            let _ = writeln!(out, "Selecting... {}", snapshot.remaining_seconds);
            for (index, name) in snapshot.candidates.iter().enumerate() {
                let marker = if snapshot.is_highlighted(index) { '*' } else { ' ' };
                let _ = writeln!(out, "  [{}] {}", marker, name);
            }
        }
        SelectionPhase::Revealed => {
            for role in Role::ALL {
                let _ = writeln!(out, "{:<27} {}", role.label(), snapshot.winner_for(role));
            }
        }
    }
    out
}

/// Renders the roster with its count label.
pub fn render_roster(roster: &Roster) -> String {
    let mut out = String::new();
    for name in roster.names() {
        let _ = writeln!(out, "{}", name);
    }
    let _ = writeln!(out, "({})", roster.count_label());
    out
}
