//! Roster Store Port - Interface for persisting the team roster.
//!
//! The roster lives in a single durable record under a fixed key, encoded
//! as a JSON array of strings. Adapters decide where that record lives.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::roster::Roster;

/// Errors that can occur during roster storage operations
#[derive(Debug, thiserror::Error)]
pub enum RosterStoreError {
    #[error("Roster storage unavailable: {0}")]
    Unavailable(String),

    #[error("Stored roster is malformed: {0}")]
    Malformed(String),

    #[error("Failed to serialize roster: {0}")]
    Serialization(String),
}

impl RosterStoreError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::StorageUnavailable
    }
}

impl From<RosterStoreError> for DomainError {
    fn from(err: RosterStoreError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Port for loading and saving the roster
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Fixed key identifying the roster record.
    fn key(&self) -> &str;

    /// Load the stored roster.
    ///
    /// An absent record is an empty roster, not an error.
    ///
    /// # Errors
    /// - `Unavailable` if the backing store cannot be read
    /// - `Malformed` if the record is not a JSON array of strings
    async fn load(&self) -> Result<Roster, RosterStoreError>;

    /// Replace the stored roster.
    ///
    /// Saving an empty roster removes the record, same as `clear`.
    async fn save(&self, roster: &Roster) -> Result<(), RosterStoreError>;

    /// Remove the stored roster. Succeeds if nothing was stored.
    async fn clear(&self) -> Result<(), RosterStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn RosterStore) {}

    #[test]
    fn every_store_error_maps_to_storage_unavailable() {
        for err in [
            RosterStoreError::Unavailable("disk".into()),
            RosterStoreError::Malformed("not an array".into()),
            RosterStoreError::Serialization("bad".into()),
        ] {
            let domain: DomainError = err.into();
            assert_eq!(domain.code, ErrorCode::StorageUnavailable);
        }
    }

    #[test]
    fn malformed_error_displays_reason() {
        let err = RosterStoreError::Malformed("expected array".into());
        assert!(err.to_string().contains("malformed"));
        assert!(err.to_string().contains("expected array"));
    }
}
