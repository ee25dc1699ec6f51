//! Read-only view of a selection for the presentation layer.

use serde::{Deserialize, Serialize};

use super::{Generation, Role, RoleAssignment, SelectionPhase};
use crate::domain::foundation::DrawId;

/// Text shown for a role whose winner is not known yet.
pub const WINNER_PLACEHOLDER: &str = "...";

/// Everything a renderer needs to draw the current state.
///
/// `candidates` and `highlighted` are only populated while selecting;
/// `winners` only once revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub generation: Generation,
    pub draw_id: Option<DrawId>,
    pub phase: SelectionPhase,
    pub remaining_seconds: u32,
    pub highlighted: Vec<usize>,
    pub candidates: Vec<String>,
    pub winners: Vec<RoleAssignment>,
}

impl SelectionSnapshot {
    /// Returns true if the candidate at `index` is currently highlighted.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    /// Names of the highlighted candidates, in index order.
    pub fn highlighted_names(&self) -> Vec<&str> {
        self.highlighted
            .iter()
            .filter_map(|&i| self.candidates.get(i).map(String::as_str))
            .collect()
    }

    /// Winner for `role`, or the placeholder before the reveal.
    pub fn winner_for(&self, role: Role) -> &str {
        self.winners
            .iter()
            .find(|a| a.role == role)
            .map(|a| a.name.as_str())
            .unwrap_or(WINNER_PLACEHOLDER)
    }
}

impl Default for SelectionSnapshot {
    fn default() -> Self {
        Self {
            generation: Generation::initial(),
            draw_id: None,
            phase: SelectionPhase::Idle,
            remaining_seconds: 0,
            highlighted: Vec::new(),
            candidates: Vec::new(),
            winners: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_for_uses_placeholder_before_reveal() {
        let snapshot = SelectionSnapshot::default();
        assert_eq!(snapshot.winner_for(Role::SeriousPresentation), "...");
    }

    #[test]
    fn highlighted_names_resolves_indices() {
        let snapshot = SelectionSnapshot {
            phase: SelectionPhase::Selecting,
            candidates: vec!["Alice".into(), "Bob".into(), "Charlie".into()],
            highlighted: vec![0, 2],
            ..SelectionSnapshot::default()
        };
        assert_eq!(snapshot.highlighted_names(), vec!["Alice", "Charlie"]);
        assert!(snapshot.is_highlighted(2));
        assert!(!snapshot.is_highlighted(1));
    }
}
