//! Main application module: replays a landmark trace through the monitor.

use crate::{
    config::Config,
    error::Result,
    monitor::BlinkMonitor,
    session_history::{SessionHistoryLog, SessionRecord, SessionSummary},
    sinks::{AlertSink, LogAlertSink, SessionSink},
    trace::{LandmarkFrame, Trace},
    window_aggregator::WindowClosed,
};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Recorded landmark trace to replay
    pub trace_path: PathBuf,
    /// Detection, window and history settings
    pub settings: Config,
}

/// Main application struct
pub struct BlinkApp {
    config: AppConfig,
    frames: Vec<LandmarkFrame>,
    monitor: BlinkMonitor,
    history: SessionHistoryLog,
    alerts: Box<dyn AlertSink>,
}

impl BlinkApp {
    /// Create a new replay application
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The settings fail validation
    /// - The trace cannot be read or contains invalid frames
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing blink monitor application");

        config.settings.validate()?;

        info!("Loading landmark trace: {}", config.trace_path.display());
        let frames = Trace::from_file(&config.trace_path)?.into_frames()?;
        info!("Loaded {} frames", frames.len());

        let start = frames.first().map_or(Duration::ZERO, |f| f.timestamp);
        let monitor = config.settings.create_monitor(start)?;

        Ok(Self {
            config,
            frames,
            monitor,
            history: SessionHistoryLog::new(),
            alerts: Box::new(LogAlertSink::new()),
        })
    }

    /// Replace the alert sink
    #[must_use]
    pub fn with_alert_sink(mut self, alerts: Box<dyn AlertSink>) -> Self {
        self.alerts = alerts;
        self
    }

    /// Replay every frame and return the session summary
    ///
    /// # Errors
    ///
    /// Returns an error only if the history file cannot be written. Alert
    /// failures are logged and replay continues.
    pub fn run(&mut self) -> Result<SessionSummary> {
        info!("Starting replay");

        let frames = std::mem::take(&mut self.frames);
        let mut skipped_faces = 0;
        for frame in &frames {
            let outcome = self.monitor.process_frame(&frame.faces, frame.timestamp);
            skipped_faces += outcome.skipped_faces;

            let status = self.monitor.status(frame.timestamp);
            debug!(
                "Blink Count: {} | Elapsed Time: {:.2}s",
                status.total_blinks,
                status.elapsed.as_secs_f64()
            );

            if let Some(closed) = outcome.window_closed {
                self.dispatch(&closed);
            }
        }
        self.frames = frames;

        if skipped_faces > 0 {
            warn!("Skipped {} faces with degenerate eye geometry", skipped_faces);
        }

        let summary = self.history.summary();
        info!(
            "Replay finished: {} blinks total, {} closed windows ({} low rate)",
            self.monitor.state().total_blinks,
            summary.windows,
            summary.low_rate_windows
        );

        if let Some(path) = &self.config.settings.history.output {
            self.history.to_file(path)?;
            info!("Session history written to {}", path.display());
        }

        Ok(summary)
    }

    /// Hand a closed window to the history log and, if low, the alert sink
    fn dispatch(&mut self, closed: &WindowClosed) {
        let record = SessionRecord::from(closed);
        if let Err(e) = self.history.on_window_closed(&record) {
            warn!("Failed to record window: {}", e);
        }

        if let Some(alert) = closed.alert() {
            if let Err(e) = self.alerts.on_low_blink_rate(&alert) {
                warn!("Failed to deliver low blink rate alert: {}", e);
            }
        }
    }

    #[must_use]
    pub fn history(&self) -> &SessionHistoryLog {
        &self.history
    }

    #[must_use]
    pub fn monitor(&self) -> &BlinkMonitor {
        &self.monitor
    }
}
