//! Shared periodic time source
//!
//! One [`SharedTicker`] owns at most one timer task. Every
//! [`TickReceiver`] handed out by [`SharedTicker::subscribe`] observes the
//! same stream of timestamps through a `watch` channel, so:
//!
//! - the clock is read once per tick, no matter how many receivers exist
//! - a receiver attached after a tick immediately sees the latest timestamp
//! - a slow receiver skips straight to the newest value instead of queueing
//!
//! Stopping the ticker aborts the task. The task owns the only `watch`
//! sender, so dropping it closes every receiver.

use async_trait::async_trait;
use clockface_core::Timestamp;
use clockface_ports::{Clock, Feed, FeedError, FeedResult};
use log::{debug, info, trace};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::error::TickerError;

/// Latest published timestamp, `None` until the first tick
type Latest = Option<Timestamp>;

/// Counters shared with the timer task
#[derive(Debug, Default)]
struct TickerStats {
    timer_starts: AtomicUsize,
    ticks: AtomicU64,
}

enum TickerState {
    /// No subscriber yet, no timer
    Idle,
    /// Timer task running
    Running {
        handle: JoinHandle<()>,
        /// Never read; clones of it start out having seen nothing
        latest: watch::Receiver<Latest>,
    },
    /// Terminal
    Stopped,
}

/// Lazily started, shared periodic ticker
pub struct SharedTicker {
    clock: Arc<dyn Clock>,
    period: Duration,
    name: String,
    state: Mutex<TickerState>,
    stats: Arc<TickerStats>,
    /// Set as soon as the ticker stops, before the task is gone
    closed: Arc<AtomicBool>,
}

impl SharedTicker {
    /// Create a ticker reading `clock` every `period`
    ///
    /// Nothing is spawned until the first [`subscribe`](Self::subscribe).
    pub fn new(
        clock: Arc<dyn Clock>,
        period: Duration,
        name: impl Into<String>,
    ) -> Result<Self, TickerError> {
        if period.is_zero() {
            return Err(TickerError::ZeroPeriod);
        }

        Ok(Self {
            clock,
            period,
            name: name.into(),
            state: Mutex::new(TickerState::Idle),
            stats: Arc::new(TickerStats::default()),
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Attach a receiver, starting the timer if this is the first one
    ///
    /// Must be called from within a Tokio runtime the first time.
    pub fn subscribe(&self) -> Result<TickReceiver, TickerError> {
        let mut state = self.state.lock();

        match &*state {
            TickerState::Running { latest, .. } => {
                return Ok(TickReceiver::new(latest.clone(), self.closed.clone()));
            }
            TickerState::Stopped => return Err(TickerError::Stopped(self.name.clone())),
            TickerState::Idle => {}
        }

        let runtime = tokio::runtime::Handle::try_current().map_err(|_| TickerError::NoRuntime)?;

        let (tx, latest) = watch::channel(None);
        let handle = runtime.spawn(run_timer(
            self.clock.clone(),
            self.period,
            tx,
            self.stats.clone(),
        ));
        self.stats.timer_starts.fetch_add(1, Ordering::Relaxed);
        info!(
            "[{}] Ticker started ({:?} period, {})",
            self.name,
            self.period,
            self.clock.name()
        );

        let receiver = TickReceiver::new(latest.clone(), self.closed.clone());
        *state = TickerState::Running { handle, latest };
        Ok(receiver)
    }

    /// Stop the timer and close every receiver
    ///
    /// Returns `false` if the ticker was already stopped.
    pub fn stop(&self) -> bool {
        match self.take_handle() {
            Some(Some(handle)) => {
                handle.abort();
                info!(
                    "[{}] Ticker stopped after {} ticks",
                    self.name,
                    self.ticks()
                );
                true
            }
            Some(None) => {
                debug!("[{}] Ticker stopped before it started", self.name);
                true
            }
            None => false,
        }
    }

    /// Stop the timer and wait until its task has been dropped
    pub async fn stop_and_wait(&self) -> bool {
        match self.take_handle() {
            Some(Some(handle)) => {
                handle.abort();
                // Cancellation is the expected outcome
                let _ = handle.await;
                info!(
                    "[{}] Ticker stopped after {} ticks",
                    self.name,
                    self.ticks()
                );
                true
            }
            Some(None) => true,
            None => false,
        }
    }

    /// Move to `Stopped`, returning the task handle if one was running
    ///
    /// `None` means the ticker was already stopped.
    fn take_handle(&self) -> Option<Option<JoinHandle<()>>> {
        let mut state = self.state.lock();
        self.closed.store(true, Ordering::Release);
        match std::mem::replace(&mut *state, TickerState::Stopped) {
            TickerState::Running { handle, .. } => Some(Some(handle)),
            TickerState::Idle => Some(None),
            TickerState::Stopped => None,
        }
    }

    /// Tick period
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Ticker name used in log lines
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many times the timer task has been spawned (0 or 1)
    pub fn timer_starts(&self) -> usize {
        self.stats.timer_starts.load(Ordering::Relaxed)
    }

    /// Number of timer firings so far
    pub fn ticks(&self) -> u64 {
        self.stats.ticks.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        matches!(*self.state.lock(), TickerState::Running { .. })
    }

    pub fn is_stopped(&self) -> bool {
        matches!(*self.state.lock(), TickerState::Stopped)
    }
}

impl Drop for SharedTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Timer loop; runs until aborted
async fn run_timer(
    clock: Arc<dyn Clock>,
    period: Duration,
    tx: watch::Sender<Latest>,
    stats: Arc<TickerStats>,
) {
    // First tick one period after start, not immediately
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        let now = clock.now();
        let count = stats.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        trace!("Tick #{} at {}", count, now);
        tx.send_replace(Some(now));
    }
}

/// One subscriber's view of a [`SharedTicker`]
pub struct TickReceiver {
    rx: watch::Receiver<Latest>,
    closed: Arc<AtomicBool>,
}

impl TickReceiver {
    fn new(rx: watch::Receiver<Latest>, closed: Arc<AtomicBool>) -> Self {
        Self { rx, closed }
    }

    /// The ticker stopped, whether or not its task has been dropped yet
    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Latest timestamp published so far, without consuming it
    pub fn latest(&self) -> Option<Timestamp> {
        *self.rx.borrow()
    }
}

#[async_trait]
impl Feed<Timestamp> for TickReceiver {
    async fn next(&mut self) -> FeedResult<Timestamp> {
        loop {
            // A value published before teardown is not delivered after it
            if self.is_closed() {
                return Err(FeedError::Closed);
            }
            self.rx.changed().await.map_err(|_| FeedError::Closed)?;
            if self.is_closed() {
                return Err(FeedError::Closed);
            }
            let latest = *self.rx.borrow_and_update();
            if let Some(ts) = latest {
                return Ok(ts);
            }
        }
    }

    fn try_next(&mut self) -> FeedResult<Option<Timestamp>> {
        if self.is_closed() {
            return Err(FeedError::Closed);
        }
        match self.rx.has_changed() {
            Ok(true) => Ok(*self.rx.borrow_and_update()),
            Ok(false) => Ok(None),
            Err(_) => Err(FeedError::Closed),
        }
    }
}
