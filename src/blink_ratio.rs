//! Eye-openness ratio computed from facial landmarks.
//!
//! The ratio divides the eye-corner distance by the eyelid gap, so it grows
//! as the eye closes. A face's combined ratio is the mean over both eyes.

use crate::{
    constants::{LEFT_EYE_LANDMARKS, NUM_EYE_LANDMARKS, NUM_FACIAL_LANDMARKS, RIGHT_EYE_LANDMARKS},
    geometry::{distance, midpoint, Point2D},
    Error, Result,
};

/// Which eye a set of landmarks outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    /// Landmark indices of this eye within a 68-point set
    #[must_use]
    pub const fn landmark_indices(self) -> [usize; NUM_EYE_LANDMARKS] {
        match self {
            Self::Left => LEFT_EYE_LANDMARKS,
            Self::Right => RIGHT_EYE_LANDMARKS,
        }
    }
}

/// The six contour points of one eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeLandmarks {
    pub outer_corner: Point2D,
    pub top_lid_1: Point2D,
    pub top_lid_2: Point2D,
    pub inner_corner: Point2D,
    pub bottom_lid_1: Point2D,
    pub bottom_lid_2: Point2D,
}

impl EyeLandmarks {
    /// Build from points ordered `[outer, top1, top2, inner, bottom1, bottom2]`
    #[must_use]
    pub fn from_points(points: [Point2D; NUM_EYE_LANDMARKS]) -> Self {
        let [outer_corner, top_lid_1, top_lid_2, inner_corner, bottom_lid_1, bottom_lid_2] = points;
        Self {
            outer_corner,
            top_lid_1,
            top_lid_2,
            inner_corner,
            bottom_lid_1,
            bottom_lid_2,
        }
    }

    /// Points in ratio order
    #[must_use]
    pub fn points(&self) -> [Point2D; NUM_EYE_LANDMARKS] {
        [
            self.outer_corner,
            self.top_lid_1,
            self.top_lid_2,
            self.inner_corner,
            self.bottom_lid_1,
            self.bottom_lid_2,
        ]
    }

    /// Eye-openness ratio: corner distance over eyelid gap.
    ///
    /// The bottom lid midpoint pairs `bottom_lid_2` with `bottom_lid_1` so
    /// each lower point sits under its upper counterpart.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateGeometry`] if the eyelid midpoints coincide.
    pub fn ratio(&self) -> Result<f64> {
        let horizontal = distance(self.outer_corner, self.inner_corner);
        let top_mid = midpoint(self.top_lid_1, self.top_lid_2);
        let bottom_mid = midpoint(self.bottom_lid_2, self.bottom_lid_1);
        let vertical = distance(top_mid, bottom_mid);

        if vertical == 0.0 {
            return Err(Error::DegenerateGeometry(format!(
                "eyelid gap is zero at ({:.3}, {:.3})",
                top_mid.x, top_mid.y
            )));
        }

        Ok(horizontal / vertical)
    }
}

/// The 68 landmark points of one detected face
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Point2D>,
}

impl LandmarkSet {
    /// Wrap landmark points, checking count and finiteness
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The number of points is not exactly 68
    /// - Any coordinate is NaN or infinite
    pub fn new(points: Vec<Point2D>) -> Result<Self> {
        if points.len() != NUM_FACIAL_LANDMARKS {
            return Err(Error::InvalidInput(format!(
                "Expected {} landmarks, got {}",
                NUM_FACIAL_LANDMARKS,
                points.len()
            )));
        }
        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::InvalidInput(format!("Landmark {idx} has a non-finite coordinate")));
        }

        Ok(Self { points })
    }

    /// All points in provider order
    #[must_use]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Extract the contour of one eye
    #[must_use]
    pub fn eye(&self, eye: Eye) -> EyeLandmarks {
        EyeLandmarks::from_points(eye.landmark_indices().map(|idx| self.points[idx]))
    }

    /// Ratio of a single eye
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateGeometry`] if that eye's lids coincide.
    pub fn eye_ratio(&self, eye: Eye) -> Result<f64> {
        self.eye(eye).ratio()
    }

    /// Mean of the left and right eye ratios.
    ///
    /// A failure on either eye discards the whole face.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateGeometry`] if either eye is degenerate.
    pub fn combined_ratio(&self) -> Result<f64> {
        let left = self.eye_ratio(Eye::Left)?;
        let right = self.eye_ratio(Eye::Right)?;
        Ok((left + right) / 2.0)
    }
}

impl TryFrom<Vec<[f64; 2]>> for LandmarkSet {
    type Error = Error;

    fn try_from(raw: Vec<[f64; 2]>) -> Result<Self> {
        Self::new(raw.into_iter().map(Point2D::from).collect())
    }
}
