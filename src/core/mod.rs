pub mod animator;
pub mod bar_buffer;
pub mod bar_corners;
pub mod bar_data;
pub mod bar_highlight;
pub mod bar_layout;
pub mod bar_shadow;
pub mod bar_values;
pub mod data_set;
pub mod entry;
pub mod primitives;
pub mod rect;
pub mod scale;
pub mod transformer;
pub mod types;
pub mod value_formatter;
pub mod view_port;

pub use animator::AnimationPhase;
pub use bar_buffer::{BarBuffer, BarBufferSet};
pub use bar_corners::{RectCorners, StackEdges, classify_bar_corners, classify_shadow_corners};
pub use bar_data::{BarData, DEFAULT_BAR_WIDTH};
pub use bar_highlight::{
    Highlight, HighlightGeometry, bar_highlight_geometry, highlight_segment, highlight_value_span,
    prepare_bar_highlight,
};
pub use bar_layout::{BarLayoutParams, prepare_buffer, single_bar_rect, stack_segments, value_edges};
pub use bar_shadow::{BarShadow, layout_bar_shadows};
pub use bar_values::{ValueLabel, ValueLabelContext, ValueLabelOffsets, layout_value_labels};
pub use data_set::{
    AxisDependency, BarChartDataSet, BarCornerType, BarShadowType, ChartDataSet, DataSetKind,
    PointDataSet,
};
pub use entry::{BarEntry, GradientColors, StackRange};
pub use rect::BarRect;
pub use scale::LinearScale;
pub use transformer::{CoordinateTransform, Transformer};
pub use types::{DataPoint, PixelPoint, Viewport};
pub use value_formatter::{DefaultValueFormatter, ValueFormatter};
pub use view_port::ViewPortHandler;
