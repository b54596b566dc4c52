use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three clock hands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// All hands, in drawing order
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Hand::Hour => "hour",
            Hand::Minute => "minute",
            Hand::Second => "second",
        };
        f.write_str(name)
    }
}

/// 360 / 12
pub const DEG_PER_HOUR: f64 = 360.0 / 12.0;
/// 360 / 60
pub const DEG_PER_MINUTE: f64 = 360.0 / 60.0;
/// 360 / 60
pub const DEG_PER_SECOND: f64 = 360.0 / 60.0;
