//! Hand-off points to the collaborators that store history and show alerts.
//!
//! The core only emits events; sinks decide how to persist or display them.
//! A failing sink is reported to the caller and never rolls back session
//! state.

use crate::{session_history::SessionRecord, window_aggregator::LowBlinkRateAlert, Result};
use log::warn;

/// Receives a record for every closed window
pub trait SessionSink {
    /// Store one closed window
    ///
    /// # Errors
    ///
    /// Returns [`Error::CollaboratorFailure`](crate::Error::CollaboratorFailure)
    /// or an I/O error if the record cannot be stored.
    fn on_window_closed(&mut self, record: &SessionRecord) -> Result<()>;
}

/// Receives a notification for every low-blink-rate window
pub trait AlertSink {
    /// Present the alert to the user without waiting for acknowledgement
    ///
    /// # Errors
    ///
    /// Returns an error if the alert cannot be delivered.
    fn on_low_blink_rate(&mut self, alert: &LowBlinkRateAlert) -> Result<()>;
}

/// Alert sink writing warnings to the log
#[derive(Debug, Default)]
pub struct LogAlertSink {
    delivered: usize,
}

impl LogAlertSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of alerts raised so far
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl AlertSink for LogAlertSink {
    fn on_low_blink_rate(&mut self, alert: &LowBlinkRateAlert) -> Result<()> {
        self.delivered += 1;
        warn!(
            "Low blink rate: {:.1} blinks/min over the last {:.0}s. Look away from the screen and blink.",
            alert.average_rate * 60.0,
            alert.window_duration_seconds
        );
        Ok(())
    }
}
