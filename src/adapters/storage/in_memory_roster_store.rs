//! In-Memory Roster Store Adapter
//!
//! Keeps the raw JSON record in memory, keyed like the file store.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::roster::Roster;
use crate::ports::{RosterStore, RosterStoreError};

/// In-memory key-value storage for the roster
#[derive(Debug, Clone)]
pub struct InMemoryRosterStore {
    key: String,
    records: Arc<RwLock<HashMap<String, String>>>,
    unavailable: bool,
}

impl InMemoryRosterStore {
    /// Create an empty in-memory store
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            records: Arc::new(RwLock::new(HashMap::new())),
            unavailable: false,
        }
    }

    /// Create a store whose every operation fails with `Unavailable`
    pub fn unavailable(key: impl Into<String>) -> Self {
        Self {
            unavailable: true,
            ..Self::new(key)
        }
    }

    /// Put a raw record in place, bypassing validation (useful for tests)
    pub async fn put_raw(&self, json: impl Into<String>) {
        self.records
            .write()
            .await
            .insert(self.key.clone(), json.into());
    }

    /// Get the raw stored record, if any
    pub async fn raw(&self) -> Option<String> {
        self.records.read().await.get(&self.key).cloned()
    }

    fn check_available(&self) -> Result<(), RosterStoreError> {
        if self.unavailable {
            Err(RosterStoreError::Unavailable(format!(
                "store for '{}' is offline",
                self.key
            )))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RosterStore for InMemoryRosterStore {
    fn key(&self) -> &str {
        &self.key
    }

    async fn load(&self) -> Result<Roster, RosterStoreError> {
        self.check_available()?;
        match self.raw().await {
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| RosterStoreError::Malformed(e.to_string()))
            }
            None => Ok(Roster::empty()),
        }
    }

    async fn save(&self, roster: &Roster) -> Result<(), RosterStoreError> {
        self.check_available()?;
        if roster.is_empty() {
            return self.clear().await;
        }
        let json = serde_json::to_string(roster)
            .map_err(|e| RosterStoreError::Serialization(e.to_string()))?;
        self.put_raw(json).await;
        Ok(())
    }

    async fn clear(&self) -> Result<(), RosterStoreError> {
        self.check_available()?;
        self.records.write().await.remove(&self.key);
        Ok(())
    }
}
