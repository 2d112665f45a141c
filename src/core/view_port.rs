use serde::{Deserialize, Serialize};

use crate::core::primitives::floor_to_hundredths;
use crate::core::{BarRect, Viewport};
use crate::error::{ChartError, ChartResult};

/// Chart surface with the content rect that bars are plotted into.
///
/// Bounds checks carry a one-pixel horizontal tolerance so bars touching the
/// content edge are not culled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPortHandler {
    viewport: Viewport,
    content: BarRect,
}

impl ViewPortHandler {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        Self::with_offsets(viewport, 0.0, 0.0, 0.0, 0.0)
    }

    /// Builds a handler whose content rect is inset by the given offsets.
    pub fn with_offsets(
        viewport: Viewport,
        offset_left: f64,
        offset_top: f64,
        offset_right: f64,
        offset_bottom: f64,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        for (name, value) in [
            ("offset_left", offset_left),
            ("offset_top", offset_top),
            ("offset_right", offset_right),
            ("offset_bottom", offset_bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "view port `{name}` must be finite and >= 0"
                )));
            }
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let content = BarRect::new(
            offset_left,
            offset_top,
            width - offset_right,
            height - offset_bottom,
        );
        if content.width() <= 0.0 || content.height() <= 0.0 {
            return Err(ChartError::InvalidData(
                "view port offsets leave no content area".to_owned(),
            ));
        }

        Ok(Self { viewport, content })
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn content_rect(self) -> BarRect {
        self.content
    }

    #[must_use]
    pub fn content_top(self) -> f64 {
        self.content.top
    }

    #[must_use]
    pub fn content_bottom(self) -> f64 {
        self.content.bottom
    }

    #[must_use]
    pub fn content_height(self) -> f64 {
        self.content.height()
    }

    #[must_use]
    pub fn is_in_bounds_left(self, x: f64) -> bool {
        self.content.left <= x + 1.0
    }

    #[must_use]
    pub fn is_in_bounds_right(self, x: f64) -> bool {
        self.content.right >= floor_to_hundredths(x) - 1.0
    }

    #[must_use]
    pub fn is_in_bounds_top(self, y: f64) -> bool {
        self.content.top <= y
    }

    #[must_use]
    pub fn is_in_bounds_bottom(self, y: f64) -> bool {
        self.content.bottom >= floor_to_hundredths(y)
    }

    #[must_use]
    pub fn is_in_bounds_y(self, y: f64) -> bool {
        self.is_in_bounds_top(y) && self.is_in_bounds_bottom(y)
    }
}
