//! Clockface Core Domain
//!
//! Pure domain types for the clockface widget: hands, timestamps and the
//! mapping from time of day to hand rotation.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod angles;
pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use angles::{DialAngles, HAND_OFFSET, angle_for, hour_angle, minute_angle, second_angle};
pub use entities::{DEG_PER_HOUR, DEG_PER_MINUTE, DEG_PER_SECOND, Hand};
pub use values::{Degrees, Timestamp};
