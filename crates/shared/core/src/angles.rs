//! Time-of-day to hand rotation
//!
//! All angles carry a -90° offset so that 0° points at "3 o'clock" and
//! -90° at "12 o'clock", matching a renderer whose unrotated hand lies
//! along the positive x axis.
//!
//! Hour and minute read the timestamp's local components. The second
//! hand reads the UTC second, which only differs from the local one for
//! offsets that are not whole minutes.

use chrono::{Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::entities::{DEG_PER_HOUR, DEG_PER_MINUTE, DEG_PER_SECOND, Hand};
use crate::values::{Degrees, Timestamp};

/// Rotation subtracted from every hand
pub const HAND_OFFSET: Degrees = 90.0;

/// `30 * (local hours mod 12) - 90`
pub fn hour_angle(ts: &Timestamp) -> Degrees {
    DEG_PER_HOUR * f64::from(ts.hour() % 12) - HAND_OFFSET
}

/// `6 * local minutes - 90`
pub fn minute_angle(ts: &Timestamp) -> Degrees {
    DEG_PER_MINUTE * f64::from(ts.minute()) - HAND_OFFSET
}

/// `6 * UTC seconds - 90`
pub fn second_angle(ts: &Timestamp) -> Degrees {
    DEG_PER_SECOND * f64::from(ts.with_timezone(&Utc).second()) - HAND_OFFSET
}

/// Angle of a single hand
pub fn angle_for(hand: Hand, ts: &Timestamp) -> Degrees {
    match hand {
        Hand::Hour => hour_angle(ts),
        Hand::Minute => minute_angle(ts),
        Hand::Second => second_angle(ts),
    }
}

/// All three hand angles derived from one timestamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialAngles {
    pub hour: Degrees,
    pub minute: Degrees,
    pub second: Degrees,
}

impl DialAngles {
    pub fn from_timestamp(ts: &Timestamp) -> Self {
        Self {
            hour: hour_angle(ts),
            minute: minute_angle(ts),
            second: second_angle(ts),
        }
    }

    /// Angle of one hand
    pub fn get(&self, hand: Hand) -> Degrees {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }
}

impl From<&Timestamp> for DialAngles {
    fn from(ts: &Timestamp) -> Self {
        Self::from_timestamp(ts)
    }
}

impl Index<Hand> for DialAngles {
    type Output = Degrees;

    fn index(&self, hand: Hand) -> &Self::Output {
        match hand {
            Hand::Hour => &self.hour,
            Hand::Minute => &self.minute,
            Hand::Second => &self.second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn at(offset_secs: i32, h: u32, m: u32, s: u32) -> Timestamp {
        FixedOffset::east_opt(offset_secs)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 9, h, m, s)
            .unwrap()
    }

    fn assert_close(actual: Degrees, expected: Degrees) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_quarter_past_three() {
        let ts = at(0, 3, 15, 15);
        let angles = DialAngles::from_timestamp(&ts);

        assert_close(angles.hour, 0.0);
        assert_close(angles.minute, 0.0);
        assert_close(angles.second, 0.0);
    }

    #[test]
    fn test_midnight_points_up() {
        let ts = at(0, 0, 0, 0);
        let angles = DialAngles::from_timestamp(&ts);

        assert_close(angles.hour, -90.0);
        assert_close(angles.minute, -90.0);
        assert_close(angles.second, -90.0);
    }

    #[test]
    fn test_hour_wraps_at_twelve() {
        assert_close(hour_angle(&at(0, 15, 0, 0)), hour_angle(&at(0, 3, 0, 0)));
        assert_close(hour_angle(&at(0, 12, 0, 0)), -90.0);
        assert_close(hour_angle(&at(0, 23, 59, 59)), 30.0 * 11.0 - 90.0);
    }

    #[test]
    fn test_formulas_over_a_day() {
        for h in 0..24 {
            for m in (0..60).step_by(7) {
                for s in (0..60).step_by(11) {
                    let ts = at(3600, h, m, s);
                    assert_close(hour_angle(&ts), 30.0 * f64::from(h % 12) - 90.0);
                    assert_close(minute_angle(&ts), 6.0 * f64::from(m) - 90.0);
                    assert_close(second_angle(&ts), 6.0 * f64::from(s) - 90.0);
                }
            }
        }
    }

    #[test]
    fn test_hour_and_minute_use_local_time() {
        // 03:15 at UTC+05:30 is 21:45 UTC the day before
        let ts = at(5 * 3600 + 1800, 3, 15, 0);

        assert_close(hour_angle(&ts), 0.0);
        assert_close(minute_angle(&ts), 0.0);
    }

    #[test]
    fn test_second_hand_reads_utc_seconds() {
        // Local 03:15:00 at an offset of -00:00:15 is 03:15:15 UTC
        let ts = at(-15, 3, 15, 0);

        assert_close(hour_angle(&ts), 0.0);
        assert_close(minute_angle(&ts), 0.0);
        assert_close(second_angle(&ts), 0.0);
    }

    #[test]
    fn test_angle_for_matches_snapshot() {
        let ts = at(-7200, 9, 42, 27);
        let angles = DialAngles::from(&ts);

        for hand in Hand::ALL {
            assert_eq!(angle_for(hand, &ts), angles.get(hand));
            assert_eq!(angles[hand], angles.get(hand));
        }
    }
}
