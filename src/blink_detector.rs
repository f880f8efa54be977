//! Debounced blink detection from per-frame combined eye ratios.
//!
//! A closed eye spans many frames at typical camera rates, so a plain
//! threshold would report one blink per frame. The detector accepts the first
//! frame above the threshold and ignores further crossings until the cooldown
//! has elapsed since the last accepted blink.

use crate::{
    constants::{DEFAULT_BLINK_RATIO_THRESHOLD, DEFAULT_COOLDOWN_SECONDS, MAX_COOLDOWN_SECONDS},
    state::BlinkSessionState,
    Error, Result,
};
use log::debug;
use std::time::Duration;

/// A single accepted blink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkEvent {
    /// Session time at which the blink was detected
    pub timestamp: Duration,
}

/// Threshold-and-cooldown blink detector
#[derive(Debug, Clone, PartialEq)]
pub struct BlinkDetector {
    threshold: f64,
    cooldown: Duration,
}

impl Default for BlinkDetector {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_BLINK_RATIO_THRESHOLD,
            cooldown: Duration::from_secs_f64(DEFAULT_COOLDOWN_SECONDS),
        }
    }
}

impl BlinkDetector {
    /// Create a detector with a ratio threshold and cooldown in seconds
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The threshold is not a finite positive number
    /// - The cooldown is negative, not finite or above [`MAX_COOLDOWN_SECONDS`]
    pub fn new(threshold: f64, cooldown_seconds: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "Blink ratio threshold must be positive, got {threshold}"
            )));
        }
        if !(0.0..=MAX_COOLDOWN_SECONDS).contains(&cooldown_seconds) {
            return Err(Error::InvalidInput(format!(
                "Cooldown must be between 0 and {MAX_COOLDOWN_SECONDS}s, got {cooldown_seconds}"
            )));
        }
        let cooldown = Duration::try_from_secs_f64(cooldown_seconds)
            .map_err(|e| Error::InvalidInput(format!("Cooldown {cooldown_seconds}s: {e}")))?;

        Ok(Self { threshold, cooldown })
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Feed one face's combined ratio observed at `now`.
    ///
    /// Returns a [`BlinkEvent`] and bumps the session counters when the ratio
    /// exceeds the threshold outside the cooldown. `now` must not go
    /// backwards between calls for the same state.
    pub fn observe(&self, state: &mut BlinkSessionState, combined_ratio: f64, now: Duration) -> Option<BlinkEvent> {
        if combined_ratio.is_nan() || combined_ratio <= self.threshold {
            return None;
        }

        if let Some(last) = state.last_blink_time {
            if now.saturating_sub(last) < self.cooldown {
                debug!(
                    "Suppressed crossing at {:.3}s ({:.3}s after last blink)",
                    now.as_secs_f64(),
                    now.saturating_sub(last).as_secs_f64()
                );
                return None;
            }
        }

        state.last_blink_time = Some(now);
        state.blink_count += 1;
        state.total_blinks += 1;

        Some(BlinkEvent { timestamp: now })
    }
}
