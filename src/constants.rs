//! Constants used throughout the application

/// Number of facial landmarks for full face
pub const NUM_FACIAL_LANDMARKS: usize = 68;

/// Number of landmarks outlining one eye
pub const NUM_EYE_LANDMARKS: usize = 6;

/// Landmark indices of the left eye contour, in ratio order
pub const LEFT_EYE_LANDMARKS: [usize; NUM_EYE_LANDMARKS] = [36, 37, 38, 39, 40, 41];

/// Landmark indices of the right eye contour, in ratio order
pub const RIGHT_EYE_LANDMARKS: [usize; NUM_EYE_LANDMARKS] = [42, 43, 44, 45, 46, 47];

/// Combined ratio above which the eyes are considered closed
pub const DEFAULT_BLINK_RATIO_THRESHOLD: f64 = 4.0;

/// Minimum seconds between two accepted blinks
pub const DEFAULT_COOLDOWN_SECONDS: f64 = 1.5;

/// Longest accepted cooldown in seconds
pub const MAX_COOLDOWN_SECONDS: f64 = 3600.0;

/// Length of one aggregation window in seconds
pub const DEFAULT_WINDOW_DURATION_SECONDS: u32 = 60;

/// Blinks per window below which the rate is considered unhealthy
pub const DEFAULT_MIN_BLINK_COUNT: u32 = 15;

/// Default window sizes for ratio filters
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 3;
pub const DEFAULT_MEDIAN_WINDOW: usize = 3;

/// Default exponential smoothing factor
pub const DEFAULT_EXPONENTIAL_ALPHA: f64 = 0.5;
