//! Per-hand angle feeds
//!
//! Each hand feed is `ticks -> angle -> distinct`, attached to the widget's
//! shared ticker. All three read the same timestamp on a given tick.

use async_trait::async_trait;
use clockface_core::{Degrees, Hand, Timestamp, hour_angle, minute_angle, second_angle};
use clockface_ports::{Feed, FeedResult};
use clockface_ticker::{Distinct, FeedExt, Map, TickReceiver};

type Projector = fn(Timestamp) -> Degrees;

fn projector(hand: Hand) -> Projector {
    match hand {
        Hand::Hour => |ts| hour_angle(&ts),
        Hand::Minute => |ts| minute_angle(&ts),
        Hand::Second => |ts| second_angle(&ts),
    }
}

/// Rotation of one hand, emitted only when it changes
pub struct HandFeed {
    hand: Hand,
    inner: Distinct<Map<TickReceiver, Projector, Timestamp>, Degrees>,
}

impl HandFeed {
    pub(crate) fn new(hand: Hand, ticks: TickReceiver) -> Self {
        Self {
            hand,
            inner: ticks.map(projector(hand)).distinct(),
        }
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    /// Last angle this feed emitted
    pub fn last(&self) -> Option<Degrees> {
        self.inner.last().copied()
    }
}

#[async_trait]
impl Feed<Degrees> for HandFeed {
    async fn next(&mut self) -> FeedResult<Degrees> {
        self.inner.next().await
    }

    fn try_next(&mut self) -> FeedResult<Option<Degrees>> {
        self.inner.try_next()
    }
}

/// The three hand feeds of one widget
pub struct HandFeeds {
    pub hour: HandFeed,
    pub minute: HandFeed,
    pub second: HandFeed,
}

impl HandFeeds {
    pub fn get_mut(&mut self, hand: Hand) -> &mut HandFeed {
        match hand {
            Hand::Hour => &mut self.hour,
            Hand::Minute => &mut self.minute,
            Hand::Second => &mut self.second,
        }
    }
}
