use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{RectPrimitive, TextPrimitive};

/// Paint order of bar chart primitives inside one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarLayer {
    Shadows,
    Bars,
    Highlights,
}

/// Backend-agnostic scene for one bar chart draw pass.
///
/// Rects are painted in layer order: shadows, bars, highlights. Texts are
/// painted last.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub shadows: Vec<RectPrimitive>,
    pub bars: Vec<RectPrimitive>,
    pub highlights: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            shadows: Vec::new(),
            bars: Vec::new(),
            highlights: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn push_rect(&mut self, layer: BarLayer, rect: RectPrimitive) {
        match layer {
            BarLayer::Shadows => self.shadows.push(rect),
            BarLayer::Bars => self.bars.push(rect),
            BarLayer::Highlights => self.highlights.push(rect),
        }
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.texts.push(text);
    }

    /// All rects in paint order.
    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.shadows
            .iter()
            .chain(&self.bars)
            .chain(&self.highlights)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in self.rects() {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shadows.is_empty()
            && self.bars.is_empty()
            && self.highlights.is_empty()
            && self.texts.is_empty()
    }
}
