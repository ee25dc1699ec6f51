//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RosterStore` - Durable key-value record holding the roster
//! - `Notifier` - Transient user notifications
//! - `EventPublisher` - Domain event delivery

mod event_publisher;
mod notifier;
mod roster_store;

pub use event_publisher::EventPublisher;
pub use notifier::Notifier;
pub use roster_store::{RosterStore, RosterStoreError};
