//! Notification configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// How long transient notifications stay visible
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NotificationConfig {
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
}

impl NotificationConfig {
    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.display_ms == 0 {
            return Err(ValidationError::ZeroDuration("notifications.display_ms"));
        }
        Ok(())
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
        }
    }
}

fn default_display_ms() -> u64 {
    2200
}
