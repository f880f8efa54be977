//! Smoothing filters for the combined eye ratio.
//!
//! Landmark trackers jitter from frame to frame; a light filter in front of
//! the blink threshold can keep single noisy frames from reading as blinks.

/// Moving average filter for simple smoothing
pub mod moving_average;

/// Median filter for outlier rejection
pub mod median;

/// Exponential filter for responsive smoothing
pub mod exponential;

use crate::{
    constants::{DEFAULT_EXPONENTIAL_ALPHA, DEFAULT_MEDIAN_WINDOW, DEFAULT_MOVING_AVERAGE_WINDOW},
    Error, Result,
};

/// Trait for all ratio filters
pub trait RatioFilter: Send + Sync {
    /// Apply filter to the next ratio sample
    fn apply(&mut self, ratio: f64) -> f64;

    /// Reset filter state
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;

    /// Fresh filter with the same parameters and empty state
    fn fresh(&self) -> Box<dyn RatioFilter>;
}

/// No-op filter that passes ratios through unchanged
pub struct NoFilter;

impl RatioFilter for NoFilter {
    fn apply(&mut self, ratio: f64) -> f64 {
        ratio
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "NoFilter"
    }

    fn fresh(&self) -> Box<dyn RatioFilter> {
        Box::new(NoFilter)
    }
}

/// Create a ratio filter from a `name[:param]` description.
///
/// Accepted forms: `none`, `moving_average[:window]`, `median[:window]`,
/// `exponential[:alpha]`.
///
/// # Errors
///
/// Returns [`Error::FilterError`] for unknown names or invalid parameters.
pub fn create_filter(filter_spec: &str) -> Result<Box<dyn RatioFilter>> {
    let spec = filter_spec.trim().to_lowercase();
    let (name, param) = match spec.split_once(':') {
        Some((name, param)) => (name, Some(param)),
        None => (spec.as_str(), None),
    };

    match name {
        "none" | "nofilter" => match param {
            None => Ok(Box::new(NoFilter)),
            Some(_) => Err(Error::FilterError("Filter 'none' takes no parameter".to_string())),
        },
        "moving_average" | "movingaverage" => {
            let window = parse_param(param, DEFAULT_MOVING_AVERAGE_WINDOW, "window size")?;
            if window == 0 {
                return Err(Error::FilterError("Window size must be greater than 0".to_string()));
            }
            Ok(Box::new(moving_average::MovingAverageFilter::new(window)))
        }
        "median" => {
            let window = parse_param(param, DEFAULT_MEDIAN_WINDOW, "window size")?;
            if window == 0 || window % 2 == 0 {
                return Err(Error::FilterError(
                    "Window size must be odd and greater than 0".to_string(),
                ));
            }
            Ok(Box::new(median::MedianFilter::new(window)))
        }
        "exponential" => {
            let alpha = parse_param(param, DEFAULT_EXPONENTIAL_ALPHA, "alpha")?;
            if !(alpha > 0.0 && alpha <= 1.0) {
                return Err(Error::FilterError(format!("Alpha must be in (0, 1], got {alpha}")));
            }
            Ok(Box::new(exponential::ExponentialFilter::new(alpha)))
        }
        _ => Err(Error::FilterError(format!("Unknown filter type: {filter_spec}"))),
    }
}

fn parse_param<T: std::str::FromStr>(param: Option<&str>, default: T, what: &str) -> Result<T> {
    match param {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::FilterError(format!("Invalid {what}: '{raw}'"))),
    }
}
