//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the outside world:
//! - `events` - Event publishers (in-memory, tracing log)
//! - `notification` - Transient and recording notifiers
//! - `storage` - Roster stores (JSON file, in-memory)
//! - `terminal` - Text rendering for the CLI

pub mod events;
pub mod notification;
pub mod storage;
pub mod terminal;

pub use events::{InMemoryEventBus, TracingEventPublisher};
pub use notification::{InMemoryNotifier, TransientNotifier};
pub use storage::{FileRosterStore, InMemoryRosterStore};
