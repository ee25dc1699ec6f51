//! Draw timing and seeding.
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `countdown_secs` | 5 | Seconds shown when a draw starts |
//! | `countdown_tick` | 1s | Period of the countdown |
//! | `highlight_interval` | 150ms | Period of the highlight shuffle |
//! | `reveal_after` | 5000ms | Delay from start to reveal |
//! | `seed` | none | Fixed RNG seed, entropy when absent |

use std::time::Duration;

use crate::config::DrawConfig;

/// Timer periods of a single draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSchedule {
    pub countdown_secs: u32,
    pub countdown_tick: Duration,
    pub highlight_interval: Duration,
    pub reveal_after: Duration,
}

impl Default for DrawSchedule {
    fn default() -> Self {
        Self {
            countdown_secs: 5,
            countdown_tick: Duration::from_secs(1),
            highlight_interval: Duration::from_millis(150),
            reveal_after: Duration::from_millis(5000),
        }
    }
}

impl From<&DrawConfig> for DrawSchedule {
    fn from(config: &DrawConfig) -> Self {
        Self {
            countdown_secs: config.countdown_secs,
            countdown_tick: Duration::from_millis(config.countdown_tick_ms),
            highlight_interval: Duration::from_millis(config.highlight_interval_ms),
            reveal_after: Duration::from_millis(config.reveal_after_ms),
        }
    }
}

/// Configuration for the `SelectionController`.
#[derive(Debug, Clone, Default)]
pub struct SelectionConfig {
    pub schedule: DrawSchedule,

    /// Seed for the draw RNG. Draws are reproducible when set.
    pub seed: Option<u64>,
}

impl SelectionConfig {
    /// Create config with a custom schedule.
    pub fn with_schedule(mut self, schedule: DrawSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Create config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl From<&DrawConfig> for SelectionConfig {
    fn from(config: &DrawConfig) -> Self {
        Self {
            schedule: DrawSchedule::from(config),
            seed: config.seed,
        }
    }
}
