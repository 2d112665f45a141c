use tracing::debug;

use crate::core::{
    AxisDependency, BarData, CoordinateTransform, LinearScale, Transformer, ViewPortHandler,
};
use crate::error::{ChartError, ChartResult};

use super::BarChartConfig;

/// Chart state the bar layout pipeline reads every frame.
pub trait BarDataProvider {
    fn bar_data(&self) -> Option<&BarData>;

    fn is_inverted(&self, axis: AxisDependency) -> bool;

    fn transformer(&self, axis: AxisDependency) -> &dyn CoordinateTransform;

    fn view_port(&self) -> ViewPortHandler;

    fn is_draw_bar_shadow_enabled(&self) -> bool;

    fn is_draw_value_above_bar_enabled(&self) -> bool;

    fn is_highlight_full_bar_enabled(&self) -> bool;

    fn is_draw_values_enabled(&self) -> bool;

    fn max_visible_value_count(&self) -> usize;

    fn value_text_height_px(&self) -> f64;

    fn value_offset_px(&self) -> f64;
}

/// Bar chart model: data, per-axis transformers and view port.
#[derive(Debug, Clone)]
pub struct BarChart {
    config: BarChartConfig,
    view_port: ViewPortHandler,
    left_transformer: Transformer,
    right_transformer: Transformer,
    data: Option<BarData>,
}

impl BarChart {
    pub fn new(config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let offsets = config.content_offsets;
        let view_port = ViewPortHandler::with_offsets(
            config.viewport,
            offsets.left,
            offsets.top,
            offsets.right,
            offsets.bottom,
        )?;
        let x_scale = LinearScale::new(config.x_start, config.x_end)?;
        let left_transformer = axis_transformer(&config, AxisDependency::Left, x_scale, view_port)?;
        let right_transformer =
            axis_transformer(&config, AxisDependency::Right, x_scale, view_port)?;

        Ok(Self {
            config,
            view_port,
            left_transformer,
            right_transformer,
            data: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    /// Replaces the configuration, keeping current data.
    pub fn set_config(&mut self, config: BarChartConfig) -> ChartResult<()> {
        let data = self.data.take();
        *self = Self::new(config)?;
        self.data = data;
        Ok(())
    }

    #[must_use]
    pub fn data(&self) -> Option<&BarData> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> Option<&mut BarData> {
        self.data.as_mut()
    }

    /// Installs new data after checking every data set is a valid bar data set.
    pub fn set_data(&mut self, data: BarData) -> ChartResult<()> {
        data.validate()?;
        debug!(
            data_sets = data.data_set_count(),
            entries = data.entry_count(),
            "set bar data"
        );
        self.data = Some(data);
        Ok(())
    }

    pub fn clear_data(&mut self) -> Option<BarData> {
        self.data.take()
    }

    #[must_use]
    pub fn axis_transformer(&self, axis: AxisDependency) -> &Transformer {
        match axis {
            AxisDependency::Left => &self.left_transformer,
            AxisDependency::Right => &self.right_transformer,
        }
    }
}

fn axis_transformer(
    config: &BarChartConfig,
    axis: AxisDependency,
    x_scale: LinearScale,
    view_port: ViewPortHandler,
) -> ChartResult<Transformer> {
    let range = config.axis(axis);
    let y_scale = LinearScale::new(range.min, range.max).map_err(|_| {
        ChartError::InvalidData(format!("{axis:?} axis range must be finite and non-zero"))
    })?;
    Ok(Transformer::new(x_scale, y_scale, view_port, range.inverted))
}

impl BarDataProvider for BarChart {
    fn bar_data(&self) -> Option<&BarData> {
        self.data.as_ref()
    }

    fn is_inverted(&self, axis: AxisDependency) -> bool {
        self.config.axis(axis).inverted
    }

    fn transformer(&self, axis: AxisDependency) -> &dyn CoordinateTransform {
        self.axis_transformer(axis)
    }

    fn view_port(&self) -> ViewPortHandler {
        self.view_port
    }

    fn is_draw_bar_shadow_enabled(&self) -> bool {
        self.config.draw_bar_shadow
    }

    fn is_draw_value_above_bar_enabled(&self) -> bool {
        self.config.draw_value_above_bar
    }

    fn is_highlight_full_bar_enabled(&self) -> bool {
        self.config.highlight_full_bar
    }

    fn is_draw_values_enabled(&self) -> bool {
        self.config.draw_values
    }

    fn max_visible_value_count(&self) -> usize {
        self.config.max_visible_value_count
    }

    fn value_text_height_px(&self) -> f64 {
        self.config.value_text_height_px
    }

    fn value_offset_px(&self) -> f64 {
        self.config.value_offset_px
    }
}
