//! Clockface Widget
//!
//! An analog clock whose hour, minute and second hands follow the wall
//! clock, one tick per second.
//!
//! ## Lifecycle
//!
//! ```text
//!   activate()            deactivate() / drop
//!  ───────────► Active ───────────────────────► Destroyed
//!                 │
//!                 ├── hour_degrees()   ─┐
//!                 ├── minute_degrees() ─┼── one shared timer
//!                 └── second_degrees() ─┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use clockface_clock::SystemClock;
//! use clockface_widget::{ClockConfig, ClockWidget, DialState};
//! use std::sync::Arc;
//!
//! let widget = ClockWidget::activate(Arc::new(SystemClock::new()), ClockConfig::default())?;
//! let view = widget.bind(DialState::default())?;
//!
//! // ... later, when the clock leaves the screen
//! widget.deactivate();
//! let final_state = view.await?;
//! ```

pub mod config;
pub mod error;
pub mod hands;
pub mod view;
pub mod widget;

// Re-export commonly used types
pub use config::{ClockConfig, ConfigError, DEFAULT_TICK_INTERVAL_MS};
pub use error::{WidgetError, WidgetResult};
pub use hands::{HandFeed, HandFeeds};
pub use view::{DialState, DialView, drive_view, rotate_transform};
pub use widget::{ClockWidget, WidgetState};

pub use clockface_core::{DialAngles, Hand};
pub use clockface_ports::{Clock, Feed, FeedError};
