use chrono::Local;
use clockface_core::Timestamp;
use clockface_ports::Clock;

/// Real system clock for production use
///
/// Returns the current wall-clock time in the host's local time zone,
/// with the offset captured alongside the instant.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now().fixed_offset()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
