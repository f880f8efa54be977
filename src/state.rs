//! Mutable session state shared by the blink detector and window aggregator.

use std::time::{Duration, Instant};

/// Monotonic clock measuring time since the start of a session.
///
/// Every timestamp in this crate is a [`Duration`] offset from such an
/// origin, so wall-clock adjustments cannot shift cooldowns or windows.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    origin: Instant,
}

impl SessionClock {
    #[must_use]
    pub fn start() -> Self {
        Self { origin: Instant::now() }
    }

    /// Time elapsed since the session started
    #[must_use]
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}

/// Counters and timestamps for one monitored session.
///
/// Only [`BlinkDetector::observe`](crate::blink_detector::BlinkDetector::observe)
/// and [`WindowAggregator::tick`](crate::window_aggregator::WindowAggregator::tick)
/// mutate it. One state object per camera keeps sessions independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlinkSessionState {
    /// Blinks counted in the current window
    pub blink_count: u32,
    /// Start of the current window
    pub window_start: Duration,
    /// Time of the last accepted blink, if any
    pub last_blink_time: Option<Duration>,
    /// Blinks counted since the session started
    pub total_blinks: u64,
}

impl BlinkSessionState {
    /// Fresh state whose first window opens at `start`
    #[must_use]
    pub fn new(start: Duration) -> Self {
        Self {
            window_start: start,
            ..Self::default()
        }
    }
}
