use clockface_core::Hand;
use clockface_ports::Clock;
use clockface_ticker::SharedTicker;
use log::{debug, info};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::config::ClockConfig;
use crate::error::{WidgetError, WidgetResult};
use crate::hands::{HandFeed, HandFeeds};
use crate::view::{DialView, drive_view};

/// Widget lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// Feeds can be created; the timer starts with the first one
    Active,
    /// Terminal: timer released, every feed closed
    Destroyed,
}

/// Analog clock widget
///
/// Created by [`activate`](Self::activate) and torn down by
/// [`deactivate`](Self::deactivate) or by being dropped. While active, every
/// feed it hands out shares a single timer.
pub struct ClockWidget {
    config: ClockConfig,
    ticker: SharedTicker,
    state: Mutex<WidgetState>,
}

impl ClockWidget {
    /// Activation hook: validate the config and prepare the shared ticker
    pub fn activate(clock: Arc<dyn Clock>, config: ClockConfig) -> WidgetResult<Self> {
        config.validate()?;
        let ticker = SharedTicker::new(clock, config.tick_interval(), config.name.clone())?;

        info!(
            "[{}] Clock widget activated ({}ms ticks)",
            config.name, config.tick_interval_ms
        );

        Ok(Self {
            config,
            ticker,
            state: Mutex::new(WidgetState::Active),
        })
    }

    /// Deactivation hook: stop the timer and close every feed
    ///
    /// Returns `false` if the widget was already destroyed.
    pub fn deactivate(&self) -> bool {
        {
            let mut state = self.state.lock();
            if *state == WidgetState::Destroyed {
                debug!("[{}] Widget already destroyed", self.config.name);
                return false;
            }
            *state = WidgetState::Destroyed;
        }

        self.ticker.stop();
        info!(
            "[{}] Clock widget destroyed after {} ticks",
            self.config.name,
            self.ticker.ticks()
        );
        true
    }

    pub fn state(&self) -> WidgetState {
        *self.state.lock()
    }

    pub fn is_active(&self) -> bool {
        self.state() == WidgetState::Active
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Angle feed for one hand
    pub fn hand_degrees(&self, hand: Hand) -> WidgetResult<HandFeed> {
        if !self.is_active() {
            return Err(WidgetError::Destroyed(self.config.name.clone()));
        }
        let ticks = self.ticker.subscribe()?;
        Ok(HandFeed::new(hand, ticks))
    }

    pub fn hour_degrees(&self) -> WidgetResult<HandFeed> {
        self.hand_degrees(Hand::Hour)
    }

    pub fn minute_degrees(&self) -> WidgetResult<HandFeed> {
        self.hand_degrees(Hand::Minute)
    }

    pub fn second_degrees(&self) -> WidgetResult<HandFeed> {
        self.hand_degrees(Hand::Second)
    }

    /// All three hand feeds
    pub fn hands(&self) -> WidgetResult<HandFeeds> {
        Ok(HandFeeds {
            hour: self.hour_degrees()?,
            minute: self.minute_degrees()?,
            second: self.second_degrees()?,
        })
    }

    /// Drive `view` from this widget's hands on a background task
    ///
    /// The task hands the view back once the widget is torn down.
    pub fn bind<V: DialView>(&self, view: V) -> WidgetResult<JoinHandle<V>> {
        let feeds = self.hands()?;
        debug!("[{}] View bound", self.config.name);
        Ok(tokio::spawn(drive_view(feeds, view)))
    }

    /// How many times a timer has been created for this widget (0 or 1)
    pub fn timer_starts(&self) -> usize {
        self.ticker.timer_starts()
    }

    /// Number of ticks so far
    pub fn ticks(&self) -> u64 {
        self.ticker.ticks()
    }

    /// Whether the underlying timer task is running
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }
}

impl Drop for ClockWidget {
    fn drop(&mut self) {
        if self.is_active() {
            self.deactivate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use chrono::{FixedOffset, TimeZone};
    use clockface_clock::ManualClock;
    use clockface_ports::{Feed, FeedError};
    use std::time::Duration;

    fn widget() -> ClockWidget {
        let start = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 3, 15, 0)
            .unwrap();
        let clock = ManualClock::stepping(start, chrono::Duration::seconds(1));
        ClockWidget::activate(clock, ClockConfig::new("test")).unwrap()
    }

    #[test]
    fn test_activate_rejects_zero_interval() {
        let clock = ManualClock::new(chrono::Utc::now().fixed_offset());
        let config = ClockConfig::default().with_tick_interval(Duration::ZERO);

        let result = ClockWidget::activate(clock, config);
        assert!(matches!(
            result,
            Err(WidgetError::Config(ConfigError::ZeroTickInterval))
        ));
    }

    #[test]
    fn test_activation_does_not_start_timer() {
        let widget = widget();

        assert_eq!(widget.state(), WidgetState::Active);
        assert_eq!(widget.timer_starts(), 0);
        assert!(!widget.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deactivate_once() {
        let widget = widget();
        let _hour = widget.hour_degrees().unwrap();

        assert!(widget.deactivate());
        assert!(!widget.deactivate());
        assert_eq!(widget.state(), WidgetState::Destroyed);
        assert!(!widget.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_feeds_after_destroy() {
        let widget = widget();
        widget.deactivate();

        assert!(matches!(
            widget.hour_degrees(),
            Err(WidgetError::Destroyed(name)) if name == "test"
        ));
        assert!(widget.hands().is_err());
        assert!(widget.bind(crate::view::DialState::default()).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_hands_share_one_timer() {
        let widget = widget();
        let mut hands = widget.hands().unwrap();
        let _extra = widget.second_degrees().unwrap();

        assert_eq!(hands.hour.next().await, Ok(0.0));
        assert_eq!(hands.minute.next().await, Ok(0.0));
        assert_eq!(hands.second.next().await, Ok(-90.0));

        assert_eq!(widget.timer_starts(), 1);
        assert_eq!(widget.ticks(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_closes_feeds() {
        let widget = widget();
        let mut second = widget.second_degrees().unwrap();
        second.next().await.unwrap();

        drop(widget);

        assert_eq!(second.next().await, Err(FeedError::Closed));
    }
}
