//! Blink monitoring library for long-session eye-strain warnings.
//!
//! This library turns per-frame facial landmarks into blink events and
//! blink-rate windows:
//! 1. Each eye's six contour points give an eye-openness ratio
//! 2. The mean ratio of both eyes is optionally smoothed
//! 3. A threshold with a cooldown turns ratio crossings into blinks
//! 4. Blinks are counted in fixed windows and low rates are flagged
//!
//! Face detection and landmark extraction happen outside this crate; any
//! provider of 68-point landmark sets can feed the monitor.
//!
//! # Examples
//!
//! ## Processing Frames
//!
//! ```
//! use blink_monitor::{blink_ratio::LandmarkSet, geometry::Point2D, monitor::BlinkMonitor};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut monitor = BlinkMonitor::with_defaults(Duration::ZERO);
//!
//! // Landmarks would come from a face landmark model
//! let face = LandmarkSet::new(vec![Point2D::new(0.0, 0.0); 68])?;
//!
//! // Degenerate faces are skipped, never fatal
//! let outcome = monitor.process_frame(&[face], Duration::from_millis(33));
//! assert_eq!(outcome.skipped_faces, 1);
//!
//! // Frames without faces still advance the window clock
//! let outcome = monitor.process_frame(&[], Duration::from_secs(60));
//! if let Some(closed) = outcome.window_closed {
//!     if let Some(alert) = closed.alert() {
//!         println!("Only {:.1} blinks/min", alert.average_rate * 60.0);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Detector and Aggregator with Explicit State
//!
//! ```
//! use blink_monitor::{
//!     blink_detector::BlinkDetector, state::BlinkSessionState,
//!     window_aggregator::WindowAggregator,
//! };
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let detector = BlinkDetector::new(4.0, 1.5)?;
//! let aggregator = WindowAggregator::new(60, 15)?;
//! let mut state = BlinkSessionState::new(Duration::ZERO);
//!
//! assert!(detector.observe(&mut state, 5.2, Duration::from_secs(3)).is_some());
//! assert!(detector.observe(&mut state, 5.2, Duration::from_millis(3100)).is_none());
//!
//! let closed = aggregator.tick(&mut state, Duration::from_secs(60)).unwrap();
//! assert_eq!(closed.blink_count, 1);
//! assert!(closed.is_low_blink_rate);
//! # Ok(())
//! # }
//! ```

/// Planar point type, midpoint and distance
pub mod geometry;

/// Eye-openness ratio from facial landmarks
pub mod blink_ratio;

/// Debounced blink detection
pub mod blink_detector;

/// Session counters and the monotonic session clock
pub mod state;

/// Blink-rate window aggregation
pub mod window_aggregator;

/// Closed-window history and session summary
pub mod session_history;

/// Persistence and alert hand-off traits
pub mod sinks;

/// Ratio smoothing filters
pub mod filters;

/// Per-frame monitoring pipeline
pub mod monitor;

/// Recorded landmark traces
pub mod trace;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
