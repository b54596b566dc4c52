//! Clockface Ticker
//!
//! The widget's time source and the operators built on top of it.
//!
//! ## Architecture
//!
//! ```text
//!             Clock
//!               │ read once per tick
//!        ┌──────▼──────┐
//!        │SharedTicker │  one tokio task, started on first subscribe
//!        └──────┬──────┘
//!               │ watch channel (replays latest)
//!     ┌─────────┼─────────┐
//!     ▼         ▼         ▼
//! TickReceiver TickReceiver TickReceiver
//!  .map(..)     .map(..)     .map(..)
//!  .distinct()  .distinct()  .distinct()
//! ```

pub mod combinators;
pub mod error;
pub mod ticker;

// Re-export commonly used types
pub use combinators::{Distinct, FeedExt, Map};
pub use error::TickerError;
pub use ticker::{SharedTicker, TickReceiver};

pub use clockface_ports::{Feed, FeedError, FeedResult};
