use tracing::{debug, trace};

use crate::core::{AnimationPhase, BarBufferSet, BarData, BarEntry, Highlight};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::{
    BarChart, BarChartConfig, BarChartRenderer, BufferSnapshot, LayoutSnapshot,
    ResolvedHighlight,
};

/// Main facade consumed by host applications.
///
/// `BarChartEngine` owns the chart model, the layout buffers, the current
/// animation phase and highlight selection, and hands each built frame to
/// its renderer.
pub struct BarChartEngine<R: Renderer> {
    renderer: R,
    chart: BarChart,
    layout: BarChartRenderer,
    phase: AnimationPhase,
    highlights: Vec<Highlight>,
}

impl<R: Renderer> BarChartEngine<R> {
    pub fn new(renderer: R, config: BarChartConfig) -> ChartResult<Self> {
        Ok(Self {
            renderer,
            chart: BarChart::new(config)?,
            layout: BarChartRenderer::new(),
            phase: AnimationPhase::COMPLETE,
            highlights: Vec::new(),
        })
    }

    #[must_use]
    pub fn chart(&self) -> &BarChart {
        &self.chart
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        self.chart.config()
    }

    pub fn set_config(&mut self, config: BarChartConfig) -> ChartResult<()> {
        self.chart.set_config(config)
    }

    /// Replaces chart data and resizes layout buffers to match.
    pub fn set_data(&mut self, data: BarData) -> ChartResult<()> {
        self.chart.set_data(data)?;
        self.highlights.clear();
        self.layout.init_buffers(&self.chart)
    }

    pub fn clear_data(&mut self) -> ChartResult<Option<BarData>> {
        let data = self.chart.clear_data();
        self.highlights.clear();
        self.layout.init_buffers(&self.chart)?;
        Ok(data)
    }

    /// Replaces the entries of one bar data set.
    pub fn set_data_set_entries(&mut self, index: usize, entries: Vec<BarEntry>) -> ChartResult<()> {
        if let Some(data) = self.chart.data_mut() {
            let set = data.bar_data_set_mut(index)?;
            set.set_entries(entries);
            debug!(index, entries = set.entry_count(), "replace data set entries");
        }
        self.layout.init_buffers(&self.chart)
    }

    #[must_use]
    pub fn animation_phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn set_animation_phase(&mut self, phase: AnimationPhase) {
        trace!(
            phase_x = phase.phase_x(),
            phase_y = phase.phase_y(),
            "set animation phase"
        );
        self.phase = phase;
    }

    pub fn highlight_values(&mut self, highlights: Vec<Highlight>) {
        self.highlights = highlights;
    }

    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    #[must_use]
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    #[must_use]
    pub fn buffers(&self) -> &BarBufferSet {
        self.layout.buffers()
    }

    /// Runs buffer sizing, layout, pixel transform and primitive emission.
    pub fn build_frame(&mut self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.chart.config().viewport);
        self.layout.draw_data(&self.chart, self.phase, &mut frame)?;
        self.layout
            .draw_highlighted(&self.chart, self.phase, &self.highlights, &mut frame)?;
        self.layout.draw_values(&self.chart, self.phase, &mut frame)?;
        Ok(frame)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        trace!(
            bars = frame.bars.len(),
            highlights = frame.highlights.len(),
            texts = frame.texts.len(),
            "render bar frame"
        );
        self.renderer.render(&frame)
    }

    pub fn resolve_highlights(&self) -> ChartResult<Vec<ResolvedHighlight>> {
        self.layout
            .resolve_highlights(&self.chart, self.phase, &self.highlights)
    }

    /// Lays out the current frame and captures buffers and highlights.
    pub fn snapshot(&mut self) -> ChartResult<LayoutSnapshot> {
        self.layout.prepare(&self.chart, self.phase)?;
        Ok(LayoutSnapshot {
            viewport: self.chart.config().viewport,
            phase: self.phase,
            buffers: self.layout.buffers().iter().map(BufferSnapshot::from).collect(),
            highlights: self
                .resolve_highlights()?
                .into_iter()
                .map(|resolved| resolved.geometry)
                .collect(),
        })
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
