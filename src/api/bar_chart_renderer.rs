use tracing::trace;

use crate::core::{
    AnimationPhase, BarBuffer, BarBufferSet, BarChartDataSet, BarLayoutParams, DefaultValueFormatter,
    Highlight, HighlightGeometry, PixelPoint, RectCorners, StackEdges, ValueLabelContext,
    ValueLabelOffsets, bar_highlight_geometry, classify_bar_corners, layout_bar_shadows,
    layout_value_labels, prepare_buffer,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    BarLayer, Color, RectFill, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::BarDataProvider;

/// Highlight resolved against current data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedHighlight {
    pub highlight: Highlight,
    pub entry_index: usize,
    pub geometry: HighlightGeometry,
    pub corners: RectCorners,
}

/// Runs the bar layout pipeline and turns its output into draw primitives.
///
/// Owns the layout buffers; they are reused across frames and indexed by data
/// set position.
#[derive(Debug, Default)]
pub struct BarChartRenderer {
    buffers: BarBufferSet,
}

impl BarChartRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn buffers(&self) -> &BarBufferSet {
        &self.buffers
    }

    pub fn init_buffers(&mut self, provider: &dyn BarDataProvider) -> ChartResult<()> {
        self.buffers.init_buffers(provider.bar_data())
    }

    /// Lays out and pixel-transforms every visible data set.
    ///
    /// Fails before touching any buffer when a data set is not a bar data set.
    pub fn prepare(&mut self, provider: &dyn BarDataProvider, phase: AnimationPhase) -> ChartResult<()> {
        self.init_buffers(provider)?;
        let Some(data) = provider.bar_data() else {
            return Ok(());
        };
        for (index, set) in data.bar_data_sets()?.into_iter().enumerate() {
            if !set.visible {
                continue;
            }
            let params = BarLayoutParams::new(
                data.bar_width(),
                provider.is_inverted(set.axis_dependency),
                phase,
            )?;
            let buffer = buffer_mut(&mut self.buffers, index)?;
            prepare_buffer(buffer, set, params)?;
            buffer.transform_to_pixels(provider.transformer(set.axis_dependency));
        }
        Ok(())
    }

    /// Emits shadow and bar primitives of every visible data set.
    pub fn draw_data(
        &mut self,
        provider: &dyn BarDataProvider,
        phase: AnimationPhase,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        self.prepare(provider, phase)?;
        let Some(data) = provider.bar_data() else {
            return Ok(());
        };
        for (index, set) in data.bar_data_sets()?.into_iter().enumerate() {
            if !set.visible {
                continue;
            }
            if provider.is_draw_bar_shadow_enabled() {
                let transformer = provider.transformer(set.axis_dependency);
                for shadow in
                    layout_bar_shadows(set, data.bar_width(), phase, transformer, provider.view_port())
                {
                    frame.push_rect(
                        BarLayer::Shadows,
                        RectPrimitive::filled(shadow.rect, set.bar_shadow_color)
                            .with_corners(shadow.corners),
                    );
                }
            }
            let buffer = buffer_ref(&self.buffers, index)?;
            push_bars(frame, set, buffer, provider);
        }
        Ok(())
    }

    /// Emits value labels; expects [`BarChartRenderer::draw_data`] to have run this frame.
    pub fn draw_values(
        &self,
        provider: &dyn BarDataProvider,
        phase: AnimationPhase,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        let Some(data) = provider.bar_data() else {
            return Ok(());
        };
        if !provider.is_draw_values_enabled()
            || data.entry_count() >= provider.max_visible_value_count()
        {
            return Ok(());
        }

        let fallback = DefaultValueFormatter::default();
        for (index, set) in data.bar_data_sets()?.into_iter().enumerate() {
            if !set.visible || !set.draw_values_enabled || set.entry_count() == 0 {
                continue;
            }
            let ctx = ValueLabelContext {
                data_set_index: index,
                phase,
                offsets: ValueLabelOffsets::resolve(
                    provider.value_text_height_px(),
                    provider.value_offset_px(),
                    provider.is_draw_value_above_bar_enabled(),
                    provider.is_inverted(set.axis_dependency),
                ),
                transformer: provider.transformer(set.axis_dependency),
                view_port: provider.view_port(),
                formatter: set.value_formatter().unwrap_or(&fallback),
            };
            let buffer = buffer_ref(&self.buffers, index)?;
            for label in layout_value_labels(set, buffer, ctx) {
                if label.text.is_empty() {
                    continue;
                }
                frame.push_text(TextPrimitive::new(
                    label.text,
                    label.x,
                    label.y,
                    set.value_font_size_px,
                    label.color,
                    TextHAlign::Center,
                ));
            }
        }
        Ok(())
    }

    /// Resolves highlights to pixel rects, skipping ones that match nothing drawable.
    pub fn resolve_highlights(
        &self,
        provider: &dyn BarDataProvider,
        phase: AnimationPhase,
        highlights: &[Highlight],
    ) -> ChartResult<Vec<ResolvedHighlight>> {
        let Some(data) = provider.bar_data() else {
            return Ok(Vec::new());
        };

        let mut resolved = Vec::with_capacity(highlights.len());
        for highlight in highlights {
            let Some(set) = data.data_sets().get(highlight.data_set_index) else {
                trace!(index = highlight.data_set_index, "highlight data set missing");
                continue;
            };
            let set = set.as_bar(highlight.data_set_index)?;
            if !set.highlight_enabled {
                continue;
            }
            let Some((entry_index, entry)) = set.entry_for_x_value(highlight.x, highlight.y) else {
                continue;
            };
            if entry_index >= phase.visible_entry_count(set.entry_count()) {
                trace!(entry_index, "highlight entry not revealed yet");
                continue;
            }

            let inverted = provider.is_inverted(set.axis_dependency);
            let geometry = bar_highlight_geometry(
                entry,
                highlight,
                provider.is_highlight_full_bar_enabled(),
                data.bar_width() / 2.0,
                provider.transformer(set.axis_dependency),
                phase.phase_y(),
            );
            let edges = StackEdges::of_highlight(geometry.segment, entry.stack_len(), inverted);
            resolved.push(ResolvedHighlight {
                highlight: *highlight,
                entry_index,
                geometry,
                corners: classify_bar_corners(set.bar_corner_type, edges),
            });
        }
        Ok(resolved)
    }

    pub fn draw_highlighted(
        &self,
        provider: &dyn BarDataProvider,
        phase: AnimationPhase,
        highlights: &[Highlight],
        frame: &mut RenderFrame,
    ) -> ChartResult<Vec<ResolvedHighlight>> {
        let resolved = self.resolve_highlights(provider, phase, highlights)?;
        let Some(data) = provider.bar_data() else {
            return Ok(resolved);
        };
        for item in &resolved {
            let set = data.data_sets()[item.highlight.data_set_index]
                .as_bar(item.highlight.data_set_index)?;
            let color = set.highlight_color.with_alpha(set.highlight_alpha);
            frame.push_rect(
                BarLayer::Highlights,
                RectPrimitive::filled(item.geometry.rect, color).with_corners(item.corners),
            );
        }
        Ok(resolved)
    }
}

fn push_bars(
    frame: &mut RenderFrame,
    set: &BarChartDataSet,
    buffer: &BarBuffer,
    provider: &dyn BarDataProvider,
) {
    let view_port = provider.view_port();
    let single_color = (set.colors.len() == 1).then(|| set.color_at(0));

    for (j, rect) in buffer.rects().iter().enumerate() {
        if !view_port.is_in_bounds_left(rect.right) {
            continue;
        }
        if !view_port.is_in_bounds_right(rect.left) {
            break;
        }

        let color = match single_color {
            Some(color) => color,
            None => {
                let color = set.color_at(j);
                if color == Color::TRANSPARENT {
                    continue;
                }
                color
            }
        };

        let corners = classify_bar_corners(set.bar_corner_type, StackEdges::of_buffer_rect(buffer, j));
        let mut primitive = RectPrimitive::filled(*rect, color).with_corners(corners);
        if let Some(colors) = buffer.gradient_colors(j).filter(|colors| colors.len() > 1) {
            primitive = primitive.with_fill(RectFill::LinearGradient {
                colors: colors.clone(),
                start: PixelPoint::new(rect.left, rect.min_y()),
                end: PixelPoint::new(rect.left, rect.max_y()),
            });
        }
        if set.bar_border_width > 0.0 {
            primitive = primitive.with_stroke(set.bar_border_width, set.bar_border_color);
        }
        frame.push_rect(BarLayer::Bars, primitive);
    }
}

fn buffer_ref(buffers: &BarBufferSet, index: usize) -> ChartResult<&BarBuffer> {
    buffers
        .get(index)
        .ok_or_else(|| ChartError::InvalidData(format!("no layout buffer for data set {index}")))
}

fn buffer_mut(buffers: &mut BarBufferSet, index: usize) -> ChartResult<&mut BarBuffer> {
    buffers
        .get_mut(index)
        .ok_or_else(|| ChartError::InvalidData(format!("no layout buffer for data set {index}")))
}
