use crate::core::{
    AnimationPhase, BarChartDataSet, BarRect, CoordinateTransform, RectCorners, ViewPortHandler,
    classify_shadow_corners,
};

/// Full-height column drawn behind one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarShadow {
    pub entry_index: usize,
    pub rect: BarRect,
    pub corners: RectCorners,
}

/// Shadow columns for the revealed entries of `data_set`, in pixel space.
///
/// Columns left of the content rect are skipped and iteration stops at the
/// first column right of it.
#[must_use]
pub fn layout_bar_shadows(
    data_set: &BarChartDataSet,
    bar_width: f64,
    phase: AnimationPhase,
    transformer: &dyn CoordinateTransform,
    view_port: ViewPortHandler,
) -> Vec<BarShadow> {
    let half = bar_width / 2.0;
    let corners = classify_shadow_corners(data_set.bar_shadow_type);
    let visible = phase.visible_entry_count(data_set.entry_count());

    let mut shadows = Vec::with_capacity(visible);
    for (entry_index, entry) in data_set.entries()[..visible].iter().enumerate() {
        let left = transformer.value_to_pixel_x(entry.x - half);
        let right = transformer.value_to_pixel_x(entry.x + half);
        if !view_port.is_in_bounds_left(right) {
            continue;
        }
        if !view_port.is_in_bounds_right(left) {
            break;
        }
        shadows.push(BarShadow {
            entry_index,
            rect: BarRect::new(
                left,
                view_port.content_top(),
                right,
                view_port.content_bottom(),
            ),
            corners,
        });
    }
    shadows
}
