//! Storage Adapters
//!
//! Implementations of the RosterStore port.
//!
//! ## Available Adapters
//!
//! - **FileRosterStore** - Stores the roster as a JSON file on disk
//! - **InMemoryRosterStore** - Stores the roster in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileRosterStore, InMemoryRosterStore};
//!
//! // Production: file-based storage
//! let store = FileRosterStore::new("./data", "iwmi_team_members");
//!
//! // Testing: in-memory storage
//! let store = InMemoryRosterStore::new("iwmi_team_members");
//! ```

mod file_roster_store;
mod in_memory_roster_store;

pub use file_roster_store::FileRosterStore;
pub use in_memory_roster_store::InMemoryRosterStore;
