//! Configuration management for the blink monitor

use crate::{
    blink_detector::BlinkDetector,
    constants::{
        DEFAULT_BLINK_RATIO_THRESHOLD, DEFAULT_COOLDOWN_SECONDS, DEFAULT_MIN_BLINK_COUNT,
        DEFAULT_WINDOW_DURATION_SECONDS, MAX_COOLDOWN_SECONDS,
    },
    filters::{create_filter, RatioFilter},
    monitor::BlinkMonitor,
    window_aggregator::WindowAggregator,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Blink detection configuration
    pub detection: DetectionConfig,

    /// Blink-rate window configuration
    pub window: WindowConfig,

    /// Session history output
    pub history: HistoryConfig,
}

/// Blink detection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Combined eye ratio above which the eyes count as closed
    pub blink_ratio_threshold: f64,

    /// Minimum seconds between two accepted blinks
    pub cooldown_seconds: f64,

    /// Ratio smoothing filter (`none`, `moving_average:N`, `median:N`, `exponential:A`)
    pub ratio_filter: String,
}

/// Window aggregation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window length in seconds
    pub window_duration_seconds: u32,

    /// Blinks per window below which an alert is raised
    pub min_blink_count: u32,
}

/// Session history output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// YAML file receiving closed windows at the end of a run
    pub output: Option<PathBuf>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            blink_ratio_threshold: DEFAULT_BLINK_RATIO_THRESHOLD,
            cooldown_seconds: DEFAULT_COOLDOWN_SECONDS,
            ratio_filter: "none".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_duration_seconds: DEFAULT_WINDOW_DURATION_SECONDS,
            min_blink_count: DEFAULT_MIN_BLINK_COUNT,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let threshold = self.detection.blink_ratio_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(Error::ConfigError(
                "Blink ratio threshold must be a positive number".to_string(),
            ));
        }
        let cooldown = self.detection.cooldown_seconds;
        if !(0.0..=MAX_COOLDOWN_SECONDS).contains(&cooldown) {
            return Err(Error::ConfigError(format!(
                "Cooldown must be between 0 and {MAX_COOLDOWN_SECONDS} seconds"
            )));
        }
        if let Err(e) = create_filter(&self.detection.ratio_filter) {
            return Err(Error::ConfigError(format!("Invalid ratio filter: {e}")));
        }

        if self.window.window_duration_seconds == 0 {
            return Err(Error::ConfigError(
                "Window duration must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Create the blink detector from configuration
    pub fn create_detector(&self) -> Result<BlinkDetector> {
        BlinkDetector::new(self.detection.blink_ratio_threshold, self.detection.cooldown_seconds)
    }

    /// Create the window aggregator from configuration
    pub fn create_aggregator(&self) -> Result<WindowAggregator> {
        WindowAggregator::new(self.window.window_duration_seconds, self.window.min_blink_count)
    }

    /// Create the ratio filter from configuration
    pub fn create_filter(&self) -> Result<Box<dyn RatioFilter>> {
        create_filter(&self.detection.ratio_filter)
    }

    /// Build a validated monitor whose first window opens at `start`
    pub fn create_monitor(&self, start: Duration) -> Result<BlinkMonitor> {
        self.validate()?;
        Ok(BlinkMonitor::new(
            self.create_detector()?,
            self.create_aggregator()?,
            self.create_filter()?,
            start,
        ))
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Blink Monitor Configuration

# Blink detection
detection:
  # Combined eye ratio (corner distance / lid gap) above which eyes are closed
  blink_ratio_threshold: 4.0
  # Minimum seconds between two counted blinks
  cooldown_seconds: 1.5
  # none, moving_average:N, median:N (odd), exponential:ALPHA
  ratio_filter: "none"

# Blink-rate windows
window:
  window_duration_seconds: 60
  min_blink_count: 15

# Session history
history:
  output: null
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.detection.blink_ratio_threshold, 4.0);
        assert_eq!(config.detection.cooldown_seconds, 1.5);
        assert_eq!(config.window.window_duration_seconds, 60);
        assert_eq!(config.window.min_blink_count, 15);
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let parsed: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = serde_yaml::from_str("detection:\n  cooldown_seconds: 0.2\n").unwrap();
        assert_eq!(parsed.detection.cooldown_seconds, 0.2);
        assert_eq!(parsed.detection.blink_ratio_threshold, 4.0);
        assert_eq!(parsed.window, WindowConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.detection.blink_ratio_threshold = -1.0;
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        let mut config = Config::default();
        config.detection.cooldown_seconds = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.detection.cooldown_seconds = 1e20;
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
        assert!(config.create_monitor(Duration::ZERO).is_err());

        let mut config = Config::default();
        config.detection.ratio_filter = "kalman".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.window.window_duration_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_create_monitor() {
        let mut config = Config::default();
        config.window.window_duration_seconds = 30;
        let monitor = config.create_monitor(Duration::ZERO).unwrap();
        assert_eq!(monitor.aggregator().window_duration(), Duration::from_secs(30));
        assert_eq!(monitor.detector().threshold(), 4.0);
    }
}
