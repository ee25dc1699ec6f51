//! Roster command errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::RosterStoreError;

#[derive(Debug, Error)]
pub enum RosterError {
    /// Clearing the roster needs an explicit yes from the user.
    #[error("Clearing the roster requires confirmation")]
    ConfirmationRequired,

    #[error(transparent)]
    Storage(#[from] RosterStoreError),
}

impl RosterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RosterError::ConfirmationRequired => ErrorCode::ConfirmationRequired,
            RosterError::Storage(e) => e.code(),
        }
    }
}

impl From<RosterError> for DomainError {
    fn from(err: RosterError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
