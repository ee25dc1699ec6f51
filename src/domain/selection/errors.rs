//! Selection-specific error types.

use thiserror::Error;

use super::{SelectionPhase, ROLE_COUNT};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by the selection session and controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Fewer names than roles were supplied.
    #[error("Need at least {required} names, got {actual}")]
    InsufficientCandidates { required: usize, actual: usize },

    #[error("Cannot transition selection from {from} to {to}")]
    InvalidTransition {
        from: SelectionPhase,
        to: SelectionPhase,
    },

    #[error("Candidate index {index} is out of range for {len} candidates")]
    IndexOutOfRange { index: usize, len: usize },

    /// A tick arrived while the session was not selecting.
    #[error("Selection is not running (phase: {0})")]
    NotSelecting(SelectionPhase),
}

impl SelectionError {
    pub fn insufficient_candidates(actual: usize) -> Self {
        SelectionError::InsufficientCandidates {
            required: ROLE_COUNT,
            actual,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SelectionError::InsufficientCandidates { .. } => ErrorCode::InsufficientCandidates,
            SelectionError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            SelectionError::IndexOutOfRange { .. } => ErrorCode::OutOfRange,
            SelectionError::NotSelecting(_) => ErrorCode::NotSelecting,
        }
    }

    /// Short text suitable for a transient notification.
    pub fn user_message(&self) -> String {
        match self {
            SelectionError::InsufficientCandidates { required, .. } => {
                format!("Need at least {} names", required)
            }
            other => other.to_string(),
        }
    }
}

impl From<SelectionError> for DomainError {
    fn from(err: SelectionError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
