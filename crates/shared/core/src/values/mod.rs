use chrono::{DateTime, FixedOffset};

/// Wall-clock reading with the local UTC offset in force when it was taken
///
/// Keeping the offset lets one value answer both local questions
/// (hour, minute) and UTC ones (second) without consulting the system
/// time zone again.
pub type Timestamp = DateTime<FixedOffset>;

/// Rotation angle in degrees
pub type Degrees = f64;
