//! Widget configuration

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Default tick period: often enough that the hands never look out of
/// sync, rarely enough not to drain batteries
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Clock widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Widget identifier used in log lines
    pub name: String,
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            name: "clock".to_string(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl ClockConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the tick period
    ///
    /// Precision is whole milliseconds; a partial millisecond rounds up.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        let millis = interval.as_nanos().div_ceil(1_000_000);
        self.tick_interval_ms = u64::try_from(millis).unwrap_or(u64::MAX);
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
