//! SelectionPhase enum for tracking the lifecycle of a draw.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Phase of the selection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPhase {
    #[default]
    Idle,
    Selecting,
    Revealed,
}

impl SelectionPhase {
    /// Returns true for any phase other than `Idle`.
    pub fn is_active(&self) -> bool {
        !matches!(self, SelectionPhase::Idle)
    }
}

impl StateMachine for SelectionPhase {
    /// Valid transitions:
    /// - Idle -> Selecting (start)
    /// - Selecting -> Revealed (terminal timer)
    /// - Selecting -> Idle, Revealed -> Idle (cancel)
    fn can_transition_to(&self, target: &Self) -> bool {
        use SelectionPhase::*;
        matches!(
            (self, target),
            (Idle, Selecting) | (Selecting, Revealed) | (Selecting, Idle) | (Revealed, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SelectionPhase::*;
        match self {
            Idle => vec![Selecting],
            Selecting => vec![Revealed, Idle],
            Revealed => vec![Idle],
        }
    }
}

impl fmt::Display for SelectionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SelectionPhase::Idle => "Idle",
            SelectionPhase::Selecting => "Selecting",
            SelectionPhase::Revealed => "Revealed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(SelectionPhase::default(), SelectionPhase::Idle);
        assert!(!SelectionPhase::Idle.is_active());
    }

    #[test]
    fn selecting_and_revealed_are_active() {
        assert!(SelectionPhase::Selecting.is_active());
        assert!(SelectionPhase::Revealed.is_active());
    }

    #[test]
    fn idle_cannot_jump_to_revealed() {
        assert!(!SelectionPhase::Idle.can_transition_to(&SelectionPhase::Revealed));
    }

    #[test]
    fn revealed_cannot_go_back_to_selecting() {
        assert!(SelectionPhase::Revealed
            .transition_to(SelectionPhase::Selecting)
            .is_err());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for phase in [
            SelectionPhase::Idle,
            SelectionPhase::Selecting,
            SelectionPhase::Revealed,
        ] {
            for target in phase.valid_transitions() {
                assert!(phase.can_transition_to(&target), "{:?} -> {:?}", phase, target);
            }
        }
    }

    #[test]
    fn no_phase_is_terminal() {
        assert!(!SelectionPhase::Revealed.is_terminal());
    }
}
