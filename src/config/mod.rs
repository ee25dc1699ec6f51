//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PRESENTER_PICKER` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use presenter_picker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Roster stored under {}", config.storage.data_dir.display());
//! ```

mod draw;
mod error;
mod logging;
mod notifications;
mod storage;

pub use draw::DrawConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use notifications::NotificationConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Draw timing (countdown, highlight period, reveal delay)
    #[serde(default)]
    pub draw: DrawConfig,

    /// Roster storage location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Notification display window
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PRESENTER_PICKER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PRESENTER_PICKER__DRAW__SEED=42` -> `draw.seed = 42`
    /// - `PRESENTER_PICKER__STORAGE__DATA_DIR=/var/lib/picker` -> `storage.data_dir`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PRESENTER_PICKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.draw.validate()?;
        self.storage.validate()?;
        self.notifications.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PRESENTER_PICKER__DRAW__SEED",
        "PRESENTER_PICKER__DRAW__REVEAL_AFTER_MS",
        "PRESENTER_PICKER__STORAGE__DATA_DIR",
        "PRESENTER_PICKER__STORAGE__KEY",
        "PRESENTER_PICKER__LOGGING__JSON",
        "PRESENTER_PICKER__NOTIFICATIONS__DISPLAY_MS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.draw, DrawConfig::default());
        assert_eq!(config.storage, StorageConfig::default());
        assert_eq!(config.notifications.display_ms, 2200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PRESENTER_PICKER__DRAW__SEED", "42");
        env::set_var("PRESENTER_PICKER__DRAW__REVEAL_AFTER_MS", "3000");
        env::set_var("PRESENTER_PICKER__STORAGE__DATA_DIR", "/tmp/picker");
        env::set_var("PRESENTER_PICKER__STORAGE__KEY", "weekly_team");
        env::set_var("PRESENTER_PICKER__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.draw.seed, Some(42));
        assert_eq!(config.draw.reveal_after_ms, 3000);
        assert_eq!(config.draw.countdown_secs, 5);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/picker"));
        assert_eq!(config.storage.key, "weekly_team");
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_zero_display() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PRESENTER_PICKER__NOTIFICATIONS__DISPLAY_MS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::ZeroDuration("notifications.display_ms"))
        );
    }
}
