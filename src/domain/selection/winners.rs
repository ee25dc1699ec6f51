//! Final result of a draw.

use serde::{Deserialize, Serialize};

use super::{Role, RoleAssignment, SelectionError, ROLE_COUNT};

/// Exactly one name per role, in role order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Winners([String; ROLE_COUNT]);

impl Winners {
    /// Winner names, index `i` belonging to `Role::ALL[i]`.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Name drawn for the given role.
    pub fn for_role(&self, role: Role) -> &str {
        let index = Role::ALL
            .iter()
            .position(|r| *r == role)
            .unwrap_or_default();
        &self.0[index]
    }

    /// Pairs each role with its winner.
    pub fn assignments(&self) -> Vec<RoleAssignment> {
        Role::ALL
            .iter()
            .zip(self.0.iter())
            .map(|(role, name)| RoleAssignment {
                role: *role,
                name: name.clone(),
            })
            .collect()
    }
}

impl TryFrom<Vec<String>> for Winners {
    type Error = SelectionError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        let actual = names.len();
        <[String; ROLE_COUNT]>::try_from(names)
            .map(Winners)
            .map_err(|_| SelectionError::InsufficientCandidates {
                required: ROLE_COUNT,
                actual,
            })
    }
}
