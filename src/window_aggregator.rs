//! Fixed-duration aggregation of blink counts into blink-rate windows.

use crate::{
    constants::{DEFAULT_MIN_BLINK_COUNT, DEFAULT_WINDOW_DURATION_SECONDS},
    state::BlinkSessionState,
    Error, Result,
};
use log::info;
use std::time::Duration;

/// Payload handed to the alert display when a window's blink rate is low
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowBlinkRateAlert {
    /// Blinks per second over the window
    pub average_rate: f64,
    /// Actual length of the window in seconds
    pub window_duration_seconds: f64,
}

/// Emitted once when a window reaches its configured duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowClosed {
    pub window_start: Duration,
    pub window_end: Duration,
    pub duration_seconds: f64,
    pub blink_count: u32,
    pub blink_rate_per_second: f64,
    pub is_low_blink_rate: bool,
}

impl WindowClosed {
    /// Alert payload, present only for low-rate windows
    #[must_use]
    pub fn alert(&self) -> Option<LowBlinkRateAlert> {
        self.is_low_blink_rate.then_some(LowBlinkRateAlert {
            average_rate: self.blink_rate_per_second,
            window_duration_seconds: self.duration_seconds,
        })
    }
}

/// Closes windows of `window_duration` and flags those with too few blinks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowAggregator {
    window_duration: Duration,
    min_blink_count: u32,
}

impl Default for WindowAggregator {
    fn default() -> Self {
        Self {
            window_duration: Duration::from_secs(u64::from(DEFAULT_WINDOW_DURATION_SECONDS)),
            min_blink_count: DEFAULT_MIN_BLINK_COUNT,
        }
    }
}

impl WindowAggregator {
    /// Create an aggregator for windows of `window_duration_seconds`
    ///
    /// # Errors
    ///
    /// Returns an error if the window duration is zero.
    pub fn new(window_duration_seconds: u32, min_blink_count: u32) -> Result<Self> {
        if window_duration_seconds == 0 {
            return Err(Error::InvalidInput("Window duration must be greater than 0".to_string()));
        }

        Ok(Self {
            window_duration: Duration::from_secs(u64::from(window_duration_seconds)),
            min_blink_count,
        })
    }

    #[must_use]
    pub fn window_duration(&self) -> Duration {
        self.window_duration
    }

    #[must_use]
    pub fn min_blink_count(&self) -> u32 {
        self.min_blink_count
    }

    /// Close the current window if it has run its full duration.
    ///
    /// Call once per frame after the frame's blinks have been observed, so a
    /// blink on the closing frame belongs to the window it closes. Calling
    /// again before the next window elapses is a no-op.
    pub fn tick(&self, state: &mut BlinkSessionState, now: Duration) -> Option<WindowClosed> {
        let elapsed = now.checked_sub(state.window_start)?;
        if elapsed < self.window_duration {
            return None;
        }

        let blink_count = state.blink_count;
        let blink_rate_per_second = f64::from(blink_count) / self.window_duration.as_secs_f64();
        let closed = WindowClosed {
            window_start: state.window_start,
            window_end: now,
            duration_seconds: elapsed.as_secs_f64(),
            blink_count,
            blink_rate_per_second,
            is_low_blink_rate: blink_count < self.min_blink_count,
        };

        info!(
            "Window closed: {} blinks in {:.1}s ({:.3}/s){}",
            blink_count,
            closed.duration_seconds,
            blink_rate_per_second,
            if closed.is_low_blink_rate { ", low blink rate" } else { "" }
        );

        state.blink_count = 0;
        state.window_start = now;

        Some(closed)
    }
}
