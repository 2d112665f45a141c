//! bar-layout: backend-agnostic bar chart layout engine.
//!
//! Bar data, animation phase and a value-to-pixel transform go in; pixel
//! rects tagged with stack edges, rounded-corner classification, shadow
//! columns, value labels and highlight rects come out as a `RenderFrame`
//! for any `Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BarChartConfig, BarChartEngine, BarChartRenderer};
pub use error::{ChartError, ChartResult};
