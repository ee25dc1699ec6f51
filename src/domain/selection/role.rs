//! Presentation roles handed out by a draw.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of roles filled by every draw.
pub const ROLE_COUNT: usize = 3;

/// Fixed presentation slots, in the order winners are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SeriousPresentation,
    SemiSeriousPresentation,
    NewToolOrPaperDemo,
}

impl Role {
    /// All roles in assignment order. Winner `i` receives `ALL[i]`.
    pub const ALL: [Role; ROLE_COUNT] = [
        Role::SeriousPresentation,
        Role::SemiSeriousPresentation,
        Role::NewToolOrPaperDemo,
    ];

    /// Display label shown on the winner card.
    pub fn label(&self) -> &'static str {
        match self {
            Role::SeriousPresentation => "Serious Presentation",
            Role::SemiSeriousPresentation => "Semi-Serious Presentation",
            Role::NewToolOrPaperDemo => "New Tool / Paper Demo",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One winner paired with the role they were drawn for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: Role,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_roles_in_assignment_order() {
        let labels: Vec<_> = Role::ALL.iter().map(Role::label).collect();
        assert_eq!(
            labels,
            vec![
                "Serious Presentation",
                "Semi-Serious Presentation",
                "New Tool / Paper Demo"
            ]
        );
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&Role::NewToolOrPaperDemo).unwrap(),
            "\"new_tool_or_paper_demo\""
        );
    }
}
