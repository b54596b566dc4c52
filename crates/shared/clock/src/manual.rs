use chrono::Duration;
use clockface_core::Timestamp;
use clockface_ports::Clock;
use parking_lot::RwLock;
use std::sync::Arc;

/// Clock that only moves when told to
///
/// Useful for deterministic tests and demos. With a non-zero `step`, every
/// call to [`Clock::now`] returns the current time and then moves it
/// forward by `step`, so a ticker reading it once per tick walks through a
/// predictable sequence of timestamps.
pub struct ManualClock {
    /// Current time
    current: RwLock<Timestamp>,
    /// Amount added after each read
    step: Duration,
}

impl ManualClock {
    /// Create a frozen clock at `start`
    pub fn new(start: Timestamp) -> Arc<Self> {
        Self::stepping(start, Duration::zero())
    }

    /// Create a clock that advances by `step` after each read
    ///
    /// Negative steps are clamped to zero.
    pub fn stepping(start: Timestamp, step: Duration) -> Arc<Self> {
        let step = if step < Duration::zero() {
            Duration::zero()
        } else {
            step
        };

        Arc::new(Self {
            current: RwLock::new(start),
            step,
        })
    }

    /// Move the clock forward by `duration`
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.write();
        *current += duration;
    }

    /// Explicitly set the time
    ///
    /// Warning: This can move the clock backwards.
    pub fn set_time(&self, time: Timestamp) {
        *self.current.write() = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let mut current = self.current.write();
        let now = *current;
        *current += self.step;
        now
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn start() -> Timestamp {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 1, 3, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_frozen_clock() {
        let clock = ManualClock::new(start());

        assert_eq!(clock.now(), start());
        assert_eq!(clock.now(), start());

        clock.advance(Duration::seconds(5));
        assert_eq!(clock.now() - start(), Duration::seconds(5));
    }

    #[test]
    fn test_stepping_clock() {
        let clock = ManualClock::stepping(start(), Duration::seconds(1));

        assert_eq!(clock.now(), start());
        assert_eq!(clock.now(), start() + Duration::seconds(1));
        assert_eq!(clock.now(), start() + Duration::seconds(2));
    }

    #[test]
    fn test_negative_step_is_clamped() {
        let clock = ManualClock::stepping(start(), Duration::seconds(-3));

        assert_eq!(clock.now(), start());
        assert_eq!(clock.now(), start());
    }

    #[test]
    fn test_set_time() {
        let clock = ManualClock::new(start());
        let later = start() + Duration::hours(9);

        clock.set_time(later);
        assert_eq!(clock.now(), later);
        assert_eq!(clock.name(), "ManualClock");
    }
}
