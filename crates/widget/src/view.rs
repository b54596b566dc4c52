//! Render surface
//!
//! A view only has to accept angle updates. [`drive_view`] subscribes the
//! view to the three hand feeds and releases it once they close, which is
//! what a template's async binding does for a declarative UI.

use clockface_core::{Degrees, Hand};
use clockface_ports::Feed;
use log::debug;

use crate::hands::HandFeeds;

/// Receives hand angle updates
pub trait DialView: Send + 'static {
    /// A hand moved to `degrees`
    fn set_hand(&mut self, hand: Hand, degrees: Degrees);
}

/// CSS/SVG transform a template binds a hand's angle to
pub fn rotate_transform(degrees: Degrees) -> String {
    format!("rotate({}deg)", degrees)
}

/// Latest angle of every hand, plus how many updates arrived
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialState {
    pub hour: Option<Degrees>,
    pub minute: Option<Degrees>,
    pub second: Option<Degrees>,
    pub updates: u64,
}

impl DialState {
    pub fn get(&self, hand: Hand) -> Option<Degrees> {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }
}

impl DialView for DialState {
    fn set_hand(&mut self, hand: Hand, degrees: Degrees) {
        let slot = match hand {
            Hand::Hour => &mut self.hour,
            Hand::Minute => &mut self.minute,
            Hand::Second => &mut self.second,
        };
        *slot = Some(degrees);
        self.updates += 1;
    }
}

/// Push every hand update into `view` until the feeds close
pub async fn drive_view<V: DialView>(mut feeds: HandFeeds, mut view: V) -> V {
    loop {
        let (hand, result) = tokio::select! {
            r = feeds.hour.next() => (Hand::Hour, r),
            r = feeds.minute.next() => (Hand::Minute, r),
            r = feeds.second.next() => (Hand::Second, r),
        };

        match result {
            Ok(degrees) => view.set_hand(hand, degrees),
            Err(e) => {
                debug!("View binding released: {} feed {}", hand, e);
                break;
            }
        }
    }
    view
}
