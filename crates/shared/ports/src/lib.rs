//! Clockface Ports
//!
//! Port definitions (traits) for the clockface widget.
//! These define the boundaries between the domain and the runtime that
//! drives it.

mod clock;
mod error;
mod feed;

pub use clock::Clock;
pub use error::{FeedError, FeedResult};
pub use feed::Feed;
