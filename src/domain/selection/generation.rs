//! Generation token distinguishing the live session from superseded ones.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonic counter bumped on every start and cancel.
///
/// Timer callbacks capture the generation they were armed for and only
/// touch the session while it still matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    pub fn initial() -> Self {
        Self(0)
    }

    /// Returns the following generation.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
