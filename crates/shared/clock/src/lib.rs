//! Clockface Clock Infrastructure
//!
//! Time sources for the widget:
//!
//! - [`SystemClock`] reads the host's local wall-clock time
//! - [`ManualClock`] is frozen or steps forward on each read, for tests
//!
//! ## Usage
//!
//! ```ignore
//! use clockface_clock::{Clock, ManualClock, SystemClock};
//! use chrono::Duration;
//!
//! let live = SystemClock::new();
//! let now = live.now();
//!
//! // One second per read, starting at `now`
//! let scripted = ManualClock::stepping(now, Duration::seconds(1));
//! scripted.advance(Duration::minutes(5)); // Jump forward
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use clockface_ports::Clock;
