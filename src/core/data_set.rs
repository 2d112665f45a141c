use std::fmt;
use std::sync::Arc;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{BarEntry, DataPoint, ValueFormatter};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Y axis a data set is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

/// Which corners of a bar are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BarCornerType {
    #[default]
    None,
    /// Rounds the top pair on the rect tagged as top of its stack.
    Top,
    /// Rounds the bottom pair on the rect tagged as bottom of its stack.
    Bottom,
    All,
}

/// Shape of the full-height shadow column behind each bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BarShadowType {
    #[default]
    None,
    TopCorner,
    BottomCorner,
}

/// Bar-specific data set.
///
/// Deserialization re-sorts entries and recomputes the stack size, so a
/// serialized `stack_size` is informational only.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "RawBarChartDataSet")]
pub struct BarChartDataSet {
    pub label: String,
    entries: Vec<BarEntry>,
    stack_size: usize,
    pub axis_dependency: AxisDependency,
    pub colors: Vec<Color>,
    pub bar_corner_type: BarCornerType,
    pub bar_border_width: f64,
    pub bar_border_color: Color,
    pub bar_shadow_color: Color,
    pub bar_shadow_type: BarShadowType,
    pub highlight_color: Color,
    pub highlight_alpha: f64,
    pub highlight_enabled: bool,
    pub visible: bool,
    pub draw_values_enabled: bool,
    pub value_text_colors: Vec<Color>,
    pub value_font_size_px: f64,
    #[serde(skip)]
    value_formatter: Option<Arc<dyn ValueFormatter>>,
}

#[derive(Deserialize)]
struct RawBarChartDataSet {
    label: String,
    entries: Vec<BarEntry>,
    axis_dependency: AxisDependency,
    colors: Vec<Color>,
    bar_corner_type: BarCornerType,
    bar_border_width: f64,
    bar_border_color: Color,
    bar_shadow_color: Color,
    bar_shadow_type: BarShadowType,
    highlight_color: Color,
    highlight_alpha: f64,
    highlight_enabled: bool,
    visible: bool,
    draw_values_enabled: bool,
    value_text_colors: Vec<Color>,
    value_font_size_px: f64,
}

impl From<RawBarChartDataSet> for BarChartDataSet {
    fn from(raw: RawBarChartDataSet) -> Self {
        let mut set = Self {
            label: raw.label,
            entries: Vec::new(),
            stack_size: 1,
            axis_dependency: raw.axis_dependency,
            colors: raw.colors,
            bar_corner_type: raw.bar_corner_type,
            bar_border_width: raw.bar_border_width,
            bar_border_color: raw.bar_border_color,
            bar_shadow_color: raw.bar_shadow_color,
            bar_shadow_type: raw.bar_shadow_type,
            highlight_color: raw.highlight_color,
            highlight_alpha: raw.highlight_alpha,
            highlight_enabled: raw.highlight_enabled,
            visible: raw.visible,
            draw_values_enabled: raw.draw_values_enabled,
            value_text_colors: raw.value_text_colors,
            value_font_size_px: raw.value_font_size_px,
            value_formatter: None,
        };
        set.set_entries(raw.entries);
        set
    }
}

impl fmt::Debug for BarChartDataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarChartDataSet")
            .field("label", &self.label)
            .field("entries", &self.entries.len())
            .field("stack_size", &self.stack_size)
            .field("axis_dependency", &self.axis_dependency)
            .field("bar_corner_type", &self.bar_corner_type)
            .field("has_value_formatter", &self.value_formatter.is_some())
            .finish_non_exhaustive()
    }
}

impl BarChartDataSet {
    /// Creates a data set; entries are ordered by `x` (stable for equal `x`).
    #[must_use]
    pub fn new(label: impl Into<String>, entries: Vec<BarEntry>) -> Self {
        let mut set = Self {
            label: label.into(),
            entries: Vec::new(),
            stack_size: 1,
            axis_dependency: AxisDependency::Left,
            colors: vec![Color::rgb(0.55, 0.92, 1.0)],
            bar_corner_type: BarCornerType::None,
            bar_border_width: 0.0,
            bar_border_color: Color::rgb(0.0, 0.0, 0.0),
            bar_shadow_color: Color::rgba(0.84, 0.84, 0.84, 1.0),
            bar_shadow_type: BarShadowType::None,
            highlight_color: Color::rgb(0.0, 0.0, 0.0),
            highlight_alpha: 120.0 / 255.0,
            highlight_enabled: true,
            visible: true,
            draw_values_enabled: true,
            value_text_colors: vec![Color::rgb(0.0, 0.0, 0.0)],
            value_font_size_px: 7.0,
            value_formatter: None,
        };
        set.set_entries(entries);
        set
    }

    pub fn set_entries(&mut self, mut entries: Vec<BarEntry>) {
        entries.sort_by_key(|entry| OrderedFloat(entry.x));
        self.stack_size = entries
            .iter()
            .map(BarEntry::stack_len)
            .max()
            .unwrap_or(1)
            .max(1);
        self.entries = entries;
    }

    #[must_use]
    pub fn with_axis_dependency(mut self, axis: AxisDependency) -> Self {
        self.axis_dependency = axis;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_corner_type(mut self, corner_type: BarCornerType) -> Self {
        self.bar_corner_type = corner_type;
        self
    }

    #[must_use]
    pub fn with_border(mut self, width: f64, color: Color) -> Self {
        self.bar_border_width = width;
        self.bar_border_color = color;
        self
    }

    #[must_use]
    pub fn with_shadow(mut self, shadow_type: BarShadowType, color: Color) -> Self {
        self.bar_shadow_type = shadow_type;
        self.bar_shadow_color = color;
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, color: Color, alpha: f64) -> Self {
        self.highlight_color = color;
        self.highlight_alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_value_formatter(mut self, formatter: Arc<dyn ValueFormatter>) -> Self {
        self.value_formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[BarEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn entry_for_index(&self, index: usize) -> Option<&BarEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn stack_size(&self) -> usize {
        self.stack_size
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stack_size > 1
    }

    /// Rect count a layout buffer needs for this data set.
    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.entry_count() * if self.is_stacked() { self.stack_size } else { 1 }
    }

    #[must_use]
    pub fn value_formatter(&self) -> Option<&dyn ValueFormatter> {
        self.value_formatter.as_deref()
    }

    /// Cycles through `colors`; falls back to transparent when the list is empty.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        cycle(&self.colors, index).unwrap_or(Color::TRANSPARENT)
    }

    #[must_use]
    pub fn value_text_color_at(&self, index: usize) -> Color {
        cycle(&self.value_text_colors, index).unwrap_or(Color::rgb(0.0, 0.0, 0.0))
    }

    /// Entry whose `x` is nearest to `x`; among equally near entries the one
    /// nearest to `closest_to_y` wins. Returns the entry index alongside.
    #[must_use]
    pub fn entry_for_x_value(&self, x: f64, closest_to_y: f64) -> Option<(usize, &BarEntry)> {
        self.entries.iter().enumerate().min_by_key(|(_, entry)| {
            (
                OrderedFloat((entry.x - x).abs()),
                OrderedFloat((entry.y - closest_to_y).abs()),
            )
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        let longest_stack = self.entries.iter().map(BarEntry::stack_len).max().unwrap_or(1);
        if self.stack_size < longest_stack {
            return Err(ChartError::InvalidData(format!(
                "data set `{}` stack size {} is below its longest stack {longest_stack}",
                self.label, self.stack_size
            )));
        }
        if self.entries.windows(2).any(|pair| pair[0].x > pair[1].x) {
            return Err(ChartError::InvalidData(format!(
                "data set `{}` entries must be ordered by x",
                self.label
            )));
        }
        if !self.bar_border_width.is_finite() || self.bar_border_width < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "data set `{}` border width must be finite and >= 0",
                self.label
            )));
        }
        if !self.highlight_alpha.is_finite() || !(0.0..=1.0).contains(&self.highlight_alpha) {
            return Err(ChartError::InvalidData(format!(
                "data set `{}` highlight alpha must be in [0, 1]",
                self.label
            )));
        }
        if !self.value_font_size_px.is_finite() || self.value_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "data set `{}` value font size must be finite and > 0",
                self.label
            )));
        }
        for color in self
            .colors
            .iter()
            .chain(&self.value_text_colors)
            .chain([
                &self.bar_border_color,
                &self.bar_shadow_color,
                &self.highlight_color,
            ])
        {
            color.validate()?;
        }
        Ok(())
    }
}

fn cycle(colors: &[Color], index: usize) -> Option<Color> {
    if colors.is_empty() {
        None
    } else {
        Some(colors[index % colors.len()])
    }
}

/// Point-based data set carried by non-bar chart kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointDataSet {
    pub label: String,
    pub points: Vec<DataPoint>,
    pub axis_dependency: AxisDependency,
}

impl PointDataSet {
    #[must_use]
    pub fn new(label: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            points,
            axis_dependency: AxisDependency::Left,
        }
    }
}

/// Discriminant of [`ChartDataSet`], used in configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSetKind {
    Bar,
    Line,
    Scatter,
}

impl fmt::Display for DataSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Scatter => "scatter",
        };
        f.write_str(name)
    }
}

/// Data set of any chart kind held by chart data containers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChartDataSet {
    Bar(BarChartDataSet),
    Line(PointDataSet),
    Scatter(PointDataSet),
}

impl From<BarChartDataSet> for ChartDataSet {
    fn from(set: BarChartDataSet) -> Self {
        Self::Bar(set)
    }
}

impl ChartDataSet {
    #[must_use]
    pub fn kind(&self) -> DataSetKind {
        match self {
            Self::Bar(_) => DataSetKind::Bar,
            Self::Line(_) => DataSetKind::Line,
            Self::Scatter(_) => DataSetKind::Scatter,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Bar(set) => &set.label,
            Self::Line(set) | Self::Scatter(set) => &set.label,
        }
    }

    /// Capability check for bar rendering; `index` names the offending set.
    pub fn as_bar(&self, index: usize) -> ChartResult<&BarChartDataSet> {
        match self {
            Self::Bar(set) => Ok(set),
            other => Err(ChartError::IncompatibleDataSet {
                index,
                kind: other.kind(),
            }),
        }
    }
}
