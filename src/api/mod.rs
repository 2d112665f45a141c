mod bar_chart;
mod bar_chart_renderer;
mod chart_config;
mod engine;
mod layout_snapshot;

pub use bar_chart::{BarChart, BarDataProvider};
pub use bar_chart_renderer::{BarChartRenderer, ResolvedHighlight};
pub use chart_config::{AxisRange, BarChartConfig, ContentOffsets};
pub use engine::BarChartEngine;
pub use layout_snapshot::{
    BufferSnapshot, LAYOUT_SNAPSHOT_JSON_SCHEMA_V1, LayoutSnapshot, LayoutSnapshotJsonContractV1,
};
