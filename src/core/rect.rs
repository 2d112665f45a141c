use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Axis-aligned rectangle stored by its four edges.
///
/// In value space `top` is the edge farther from the baseline in chart
/// orientation, so `top >= bottom` on a non-inverted axis. After the pixel
/// transform `top` is the edge closer to the top of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BarRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BarRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    /// Signed height (`bottom - top`).
    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn mid_x(self) -> f64 {
        self.left + self.width() * 0.5
    }

    #[must_use]
    pub fn min_y(self) -> f64 {
        self.top.min(self.bottom)
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.top.max(self.bottom)
    }

    #[must_use]
    pub fn scale_y(self, factor: f64) -> Self {
        Self {
            top: self.top * factor,
            bottom: self.bottom * factor,
            ..self
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.left.is_finite()
            || !self.top.is_finite()
            || !self.right.is_finite()
            || !self.bottom.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect edges must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
