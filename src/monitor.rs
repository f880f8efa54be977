//! Per-frame blink monitoring pipeline.
//!
//! [`BlinkMonitor`] owns the session state and runs each frame through
//! ratio computation, optional smoothing, debounced detection and window
//! aggregation. It performs no I/O and never blocks.
//!
//! Smoothing is kept per face position: the n-th face of a frame is
//! filtered with the n-th face of the previous frame. When the number of
//! faces changes the pairing is lost and every filter starts over.

use crate::{
    blink_detector::{BlinkDetector, BlinkEvent},
    blink_ratio::LandmarkSet,
    filters::{NoFilter, RatioFilter},
    state::BlinkSessionState,
    window_aggregator::{WindowAggregator, WindowClosed},
};
use log::{debug, info};
use std::time::Duration;

/// What happened while processing one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutcome {
    /// Blinks accepted on this frame
    pub blinks: Vec<BlinkEvent>,
    /// Faces dropped because an eye's geometry was degenerate
    pub skipped_faces: usize,
    /// Window closed at the end of this frame, if any
    pub window_closed: Option<WindowClosed>,
}

/// Values shown on the live overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    /// Blinks since the session started
    pub total_blinks: u64,
    /// Blinks in the current window
    pub window_blinks: u32,
    /// Time since the session started
    pub elapsed: Duration,
}

/// Blink monitor for one camera session
pub struct BlinkMonitor {
    detector: BlinkDetector,
    aggregator: WindowAggregator,
    filter: Box<dyn RatioFilter>,
    face_filters: Vec<Box<dyn RatioFilter>>,
    state: BlinkSessionState,
    session_start: Duration,
}

impl BlinkMonitor {
    /// Create a monitor whose first window opens at `start`
    #[must_use]
    pub fn new(
        detector: BlinkDetector,
        aggregator: WindowAggregator,
        filter: Box<dyn RatioFilter>,
        start: Duration,
    ) -> Self {
        info!(
            "Blink monitor started: threshold {:.2}, cooldown {:.2}s, window {}s, min {} blinks, filter {}",
            detector.threshold(),
            detector.cooldown().as_secs_f64(),
            aggregator.window_duration().as_secs(),
            aggregator.min_blink_count(),
            filter.name()
        );
        Self {
            detector,
            aggregator,
            filter,
            face_filters: Vec::new(),
            state: BlinkSessionState::new(start),
            session_start: start,
        }
    }

    /// Monitor with default thresholds and no smoothing
    #[must_use]
    pub fn with_defaults(start: Duration) -> Self {
        Self::new(
            BlinkDetector::default(),
            WindowAggregator::default(),
            Box::new(NoFilter),
            start,
        )
    }

    /// Process the faces detected in one frame captured at `now`.
    ///
    /// An empty slice is a frame without faces: nothing is observed but the
    /// window clock still advances. Faces are observed in order, then the
    /// window is checked once.
    pub fn process_frame(&mut self, faces: &[LandmarkSet], now: Duration) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        if self.face_filters.len() != faces.len() {
            if !self.face_filters.is_empty() {
                debug!("Face count changed to {}, resetting ratio filters", faces.len());
            }
            self.face_filters = faces.iter().map(|_| self.filter.fresh()).collect();
        }

        for (idx, face) in faces.iter().enumerate() {
            let filter = &mut self.face_filters[idx];
            let ratio = match face.combined_ratio() {
                Ok(ratio) => ratio,
                Err(e) => {
                    debug!("Skipping face {} at {:.3}s: {}", idx, now.as_secs_f64(), e);
                    outcome.skipped_faces += 1;
                    filter.reset();
                    continue;
                }
            };

            let smoothed = filter.apply(ratio);
            if let Some(event) = self.detector.observe(&mut self.state, smoothed, now) {
                info!(
                    "Blink #{} at {:.3}s (ratio {:.2})",
                    self.state.total_blinks,
                    now.as_secs_f64(),
                    smoothed
                );
                outcome.blinks.push(event);
            }
        }

        outcome.window_closed = self.aggregator.tick(&mut self.state, now);
        outcome
    }

    /// Overlay values at `now`
    #[must_use]
    pub fn status(&self, now: Duration) -> SessionStatus {
        SessionStatus {
            total_blinks: self.state.total_blinks,
            window_blinks: self.state.blink_count,
            elapsed: now.saturating_sub(self.session_start),
        }
    }

    #[must_use]
    pub fn state(&self) -> &BlinkSessionState {
        &self.state
    }

    #[must_use]
    pub fn detector(&self) -> &BlinkDetector {
        &self.detector
    }

    #[must_use]
    pub fn aggregator(&self) -> &WindowAggregator {
        &self.aggregator
    }
}
