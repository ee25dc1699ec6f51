//! Notification Adapters
//!
//! - **TransientNotifier** - Shows one message at a time for a display window
//! - **InMemoryNotifier** - Records messages (testing)

mod in_memory;
mod transient;

pub use in_memory::InMemoryNotifier;
pub use transient::{Notification, TransientNotifier};
