mod frame;
mod null_renderer;
mod primitives;

pub use frame::{BarLayer, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, RectFill, RectPrimitive, RectStroke, TextHAlign, TextPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from bar layout.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
