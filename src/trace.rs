//! Recorded landmark traces for offline replay.
//!
//! A trace is a YAML (or JSON) document listing frames in capture order:
//!
//! ```yaml
//! frames:
//!   - timestamp: 0.033
//!     faces:
//!       - [[x0, y0], [x1, y1], ...]   # 68 points per face
//!   - timestamp: 0.066
//!     faces: []                       # no face detected
//! ```

use crate::{blink_ratio::LandmarkSet, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Raw frame as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    /// Capture time in seconds since the start of the recording
    pub timestamp: f64,
    /// Landmark points of every detected face
    #[serde(default)]
    pub faces: Vec<Vec<[f64; 2]>>,
}

/// On-disk trace document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub frames: Vec<TraceFrame>,
}

/// A validated frame ready for the monitor
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFrame {
    pub timestamp: Duration,
    pub faces: Vec<LandmarkSet>,
}

impl Trace {
    /// Load a trace from a YAML or JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::CollaboratorFailure(format!("Cannot read trace {}: {e}", path.as_ref().display()))
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Save the trace as YAML
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Check timestamps and landmarks, converting every frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if:
    /// - A timestamp is negative, not finite or too large for a [`Duration`]
    /// - Timestamps decrease between frames
    /// - A face does not have exactly 68 finite points
    pub fn into_frames(self) -> Result<Vec<LandmarkFrame>> {
        let mut frames = Vec::with_capacity(self.frames.len());
        let mut previous = Duration::ZERO;

        for (idx, frame) in self.frames.into_iter().enumerate() {
            if !frame.timestamp.is_finite() || frame.timestamp < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "Frame {idx}: invalid timestamp {}",
                    frame.timestamp
                )));
            }
            let timestamp = Duration::try_from_secs_f64(frame.timestamp).map_err(|e| {
                Error::InvalidInput(format!("Frame {idx}: timestamp {} out of range: {e}", frame.timestamp))
            })?;
            if timestamp < previous {
                return Err(Error::InvalidInput(format!(
                    "Frame {idx}: timestamp {:.3}s precedes previous frame at {:.3}s",
                    frame.timestamp,
                    previous.as_secs_f64()
                )));
            }
            previous = timestamp;

            let faces = frame
                .faces
                .into_iter()
                .enumerate()
                .map(|(face_idx, raw)| {
                    LandmarkSet::try_from(raw)
                        .map_err(|e| Error::InvalidInput(format!("Frame {idx}, face {face_idx}: {e}")))
                })
                .collect::<Result<Vec<_>>>()?;

            frames.push(LandmarkFrame { timestamp, faces });
        }

        Ok(frames)
    }
}
