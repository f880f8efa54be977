use super::RatioFilter;

/// Exponential smoothing filter
pub struct ExponentialFilter {
    alpha: f64,
    last: Option<f64>,
}

impl ExponentialFilter {
    pub fn new(alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha <= 1.0, "Alpha must be in (0, 1]");
        Self { alpha, last: None }
    }
}

impl RatioFilter for ExponentialFilter {
    fn apply(&mut self, ratio: f64) -> f64 {
        let filtered = match self.last {
            Some(last) => self.alpha * ratio + (1.0 - self.alpha) * last,
            None => ratio,
        };
        self.last = Some(filtered);
        filtered
    }

    fn reset(&mut self) {
        self.last = None;
    }

    fn name(&self) -> &str {
        "ExponentialFilter"
    }

    fn fresh(&self) -> Box<dyn RatioFilter> {
        Box::new(ExponentialFilter::new(self.alpha))
    }
}
