//! Draw timing configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Timing of a selection draw
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DrawConfig {
    /// Seconds shown on the countdown when a draw starts
    #[serde(default = "default_countdown_secs")]
    pub countdown_secs: u32,

    /// Period of the countdown tick in milliseconds
    #[serde(default = "default_countdown_tick_ms")]
    pub countdown_tick_ms: u64,

    /// Period of the highlight shuffle in milliseconds
    #[serde(default = "default_highlight_interval_ms")]
    pub highlight_interval_ms: u64,

    /// Delay from start to reveal in milliseconds
    #[serde(default = "default_reveal_after_ms")]
    pub reveal_after_ms: u64,

    /// Fixed RNG seed for reproducible draws
    pub seed: Option<u64>,
}

impl DrawConfig {
    /// Validate draw configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.countdown_secs == 0 {
            return Err(ValidationError::ZeroDuration("draw.countdown_secs"));
        }
        if self.countdown_tick_ms == 0 {
            return Err(ValidationError::ZeroDuration("draw.countdown_tick_ms"));
        }
        if self.highlight_interval_ms == 0 {
            return Err(ValidationError::ZeroDuration("draw.highlight_interval_ms"));
        }
        if self.reveal_after_ms == 0 {
            return Err(ValidationError::ZeroDuration("draw.reveal_after_ms"));
        }
        if self.reveal_after_ms < self.highlight_interval_ms {
            return Err(ValidationError::RevealBeforeFirstHighlight);
        }
        Ok(())
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            countdown_secs: default_countdown_secs(),
            countdown_tick_ms: default_countdown_tick_ms(),
            highlight_interval_ms: default_highlight_interval_ms(),
            reveal_after_ms: default_reveal_after_ms(),
            seed: None,
        }
    }
}

fn default_countdown_secs() -> u32 {
    5
}

fn default_countdown_tick_ms() -> u64 {
    1000
}

fn default_highlight_interval_ms() -> u64 {
    150
}

fn default_reveal_after_ms() -> u64 {
    5000
}
