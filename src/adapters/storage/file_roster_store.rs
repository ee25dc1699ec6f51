//! File-based Roster Store Adapter
//!
//! Stores the roster as a JSON array in `<data_dir>/<key>.json`.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::roster::Roster;
use crate::ports::{RosterStore, RosterStoreError};

/// File-based storage for the roster
#[derive(Debug, Clone)]
pub struct FileRosterStore {
    data_dir: PathBuf,
    key: String,
}

impl FileRosterStore {
    /// Create a store rooted at `data_dir`, using `key` as the record name.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileRosterStore::new("./data", "iwmi_team_members");
    /// ```
    pub fn new<P: AsRef<Path>>(data_dir: P, key: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            key: key.into(),
        }
    }

    /// Path of the JSON record
    pub fn record_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.key))
    }
}

#[async_trait]
impl RosterStore for FileRosterStore {
    fn key(&self) -> &str {
        &self.key
    }

    async fn load(&self) -> Result<Roster, RosterStoreError> {
        let path = self.record_path();

        let json = match fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Roster::empty()),
            Err(e) => return Err(RosterStoreError::Unavailable(e.to_string())),
        };

        serde_json::from_str(&json).map_err(|e| RosterStoreError::Malformed(e.to_string()))
    }

    async fn save(&self, roster: &Roster) -> Result<(), RosterStoreError> {
        if roster.is_empty() {
            return self.clear().await;
        }

        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| RosterStoreError::Unavailable(e.to_string()))?;

        let json = serde_json::to_string(roster)
            .map_err(|e| RosterStoreError::Serialization(e.to_string()))?;

        fs::write(self.record_path(), json)
            .await
            .map_err(|e| RosterStoreError::Unavailable(e.to_string()))
    }

    async fn clear(&self) -> Result<(), RosterStoreError> {
        match fs::remove_file(self.record_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RosterStoreError::Unavailable(e.to_string())),
        }
    }
}
