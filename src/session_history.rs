//! Append-only log of closed blink-rate windows.

use crate::{sinks::SessionSink, window_aggregator::WindowClosed, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// One closed window, as handed to persistence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Window start, as session time
    pub window_start: Duration,
    /// Window end, as session time
    pub window_end: Duration,
    pub duration_seconds: f64,
    pub blink_count: u32,
    pub blink_rate_per_second: f64,
    pub is_low_blink_rate: bool,
}

impl From<&WindowClosed> for SessionRecord {
    fn from(closed: &WindowClosed) -> Self {
        Self {
            window_start: closed.window_start,
            window_end: closed.window_end,
            duration_seconds: closed.duration_seconds,
            blink_count: closed.blink_count,
            blink_rate_per_second: closed.blink_rate_per_second,
            is_low_blink_rate: closed.is_low_blink_rate,
        }
    }
}

/// Totals over every recorded window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SessionSummary {
    pub windows: usize,
    pub total_blinks: u64,
    pub total_duration_seconds: f64,
    /// Blinks per second over all recorded windows
    pub average_rate_per_second: f64,
    pub low_rate_windows: usize,
}

/// History of closed windows for one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionHistoryLog {
    records: Vec<SessionRecord>,
}

impl SessionHistoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for a closed window
    pub fn record(&mut self, closed: &WindowClosed) -> &SessionRecord {
        self.records.push(SessionRecord::from(closed));
        &self.records[self.records.len() - 1]
    }

    #[must_use]
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records flagged as low blink rate
    pub fn low_rate_windows(&self) -> impl Iterator<Item = &SessionRecord> {
        self.records.iter().filter(|r| r.is_low_blink_rate)
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        let total_blinks: u64 = self.records.iter().map(|r| u64::from(r.blink_count)).sum();
        let total_duration_seconds: f64 = self.records.iter().map(|r| r.duration_seconds).sum();
        #[allow(clippy::cast_precision_loss)] // Blink totals stay far below 2^52
        let average_rate_per_second = if total_duration_seconds > 0.0 {
            total_blinks as f64 / total_duration_seconds
        } else {
            0.0
        };

        SessionSummary {
            windows: self.records.len(),
            total_blinks,
            total_duration_seconds,
            average_rate_per_second,
            low_rate_windows: self.low_rate_windows().count(),
        }
    }

    /// Load a history log from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Save the history log to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path.as_ref(), content).map_err(|e| {
            Error::CollaboratorFailure(format!(
                "Failed to write session history to {}: {e}",
                path.as_ref().display()
            ))
        })
    }
}

impl SessionSink for SessionHistoryLog {
    fn on_window_closed(&mut self, record: &SessionRecord) -> Result<()> {
        self.records.push(*record);
        Ok(())
    }
}
