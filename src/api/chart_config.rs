use serde::{Deserialize, Serialize};

use crate::core::{AxisDependency, Viewport};
use crate::error::{ChartError, ChartResult};

/// Value range and orientation of one y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub inverted: bool,
}

impl AxisRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            inverted: false,
        }
    }

    #[must_use]
    pub const fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }
}

/// Content insets of the plot area inside the viewport, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ContentOffsets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Public bar chart configuration.
///
/// Serializable so hosts can persist chart setup next to their data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub content_offsets: ContentOffsets,
    pub x_start: f64,
    pub x_end: f64,
    #[serde(default = "default_axis_range")]
    pub left_axis: AxisRange,
    #[serde(default = "default_axis_range")]
    pub right_axis: AxisRange,
    #[serde(default)]
    pub draw_bar_shadow: bool,
    #[serde(default = "default_true")]
    pub draw_value_above_bar: bool,
    #[serde(default)]
    pub highlight_full_bar: bool,
    #[serde(default = "default_true")]
    pub draw_values: bool,
    #[serde(default = "default_max_visible_value_count")]
    pub max_visible_value_count: usize,
    #[serde(default = "default_value_text_height_px")]
    pub value_text_height_px: f64,
    #[serde(default = "default_value_offset_px")]
    pub value_offset_px: f64,
}

impl BarChartConfig {
    /// Minimal config with a `[0, 1]` range on both y axes.
    #[must_use]
    pub fn new(viewport: Viewport, x_start: f64, x_end: f64) -> Self {
        Self {
            viewport,
            content_offsets: ContentOffsets::default(),
            x_start,
            x_end,
            left_axis: default_axis_range(),
            right_axis: default_axis_range(),
            draw_bar_shadow: false,
            draw_value_above_bar: true,
            highlight_full_bar: false,
            draw_values: true,
            max_visible_value_count: default_max_visible_value_count(),
            value_text_height_px: default_value_text_height_px(),
            value_offset_px: default_value_offset_px(),
        }
    }

    /// Sets the value range of both y axes.
    #[must_use]
    pub fn with_y_domain(mut self, min: f64, max: f64) -> Self {
        self.left_axis = AxisRange::new(min, max).inverted(self.left_axis.inverted);
        self.right_axis = AxisRange::new(min, max).inverted(self.right_axis.inverted);
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisDependency, range: AxisRange) -> Self {
        match axis {
            AxisDependency::Left => self.left_axis = range,
            AxisDependency::Right => self.right_axis = range,
        }
        self
    }

    #[must_use]
    pub fn with_axis_inverted(mut self, axis: AxisDependency, inverted: bool) -> Self {
        match axis {
            AxisDependency::Left => self.left_axis.inverted = inverted,
            AxisDependency::Right => self.right_axis.inverted = inverted,
        }
        self
    }

    #[must_use]
    pub fn with_content_offsets(mut self, offsets: ContentOffsets) -> Self {
        self.content_offsets = offsets;
        self
    }

    #[must_use]
    pub fn with_bar_shadow(mut self, enabled: bool) -> Self {
        self.draw_bar_shadow = enabled;
        self
    }

    #[must_use]
    pub fn with_value_above_bar(mut self, enabled: bool) -> Self {
        self.draw_value_above_bar = enabled;
        self
    }

    #[must_use]
    pub fn with_highlight_full_bar(mut self, enabled: bool) -> Self {
        self.highlight_full_bar = enabled;
        self
    }

    #[must_use]
    pub fn with_draw_values(mut self, enabled: bool) -> Self {
        self.draw_values = enabled;
        self
    }

    #[must_use]
    pub fn with_max_visible_value_count(mut self, count: usize) -> Self {
        self.max_visible_value_count = count;
        self
    }

    #[must_use]
    pub fn with_value_text_height_px(mut self, height_px: f64) -> Self {
        self.value_text_height_px = height_px;
        self
    }

    #[must_use]
    pub fn axis(&self, axis: AxisDependency) -> AxisRange {
        match axis {
            AxisDependency::Left => self.left_axis,
            AxisDependency::Right => self.right_axis,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.x_start.is_finite() || !self.x_end.is_finite() || self.x_start == self.x_end {
            return Err(ChartError::InvalidData(
                "x range must be finite and non-zero".to_owned(),
            ));
        }
        if !self.value_text_height_px.is_finite() || self.value_text_height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "value text height must be finite and > 0".to_owned(),
            ));
        }
        if !self.value_offset_px.is_finite() || self.value_offset_px < 0.0 {
            return Err(ChartError::InvalidData(
                "value offset must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_axis_range() -> AxisRange {
    AxisRange::new(0.0, 1.0)
}

fn default_true() -> bool {
    true
}

fn default_max_visible_value_count() -> usize {
    100
}

fn default_value_text_height_px() -> f64 {
    12.0
}

fn default_value_offset_px() -> f64 {
    4.5
}
