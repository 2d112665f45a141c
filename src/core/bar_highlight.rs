use serde::{Deserialize, Serialize};

use crate::core::{BarEntry, BarRect, CoordinateTransform, PixelPoint};

/// User selection of a bar, optionally narrowed to one stack segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub data_set_index: usize,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub stack_index: Option<usize>,
}

impl Highlight {
    #[must_use]
    pub fn new(data_set_index: usize, x: f64, y: f64) -> Self {
        Self {
            data_set_index,
            x,
            y,
            stack_index: None,
        }
    }

    #[must_use]
    pub fn with_stack_index(mut self, stack_index: usize) -> Self {
        self.stack_index = Some(stack_index);
        self
    }
}

/// Resolved highlight for one entry, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightGeometry {
    pub rect: BarRect,
    /// Anchor for callouts: horizontal center of the top edge.
    pub draw_position: PixelPoint,
    /// Stack segment the rect covers; `None` for whole bars.
    pub segment: Option<usize>,
}

/// Value span `(y1, y2)` covered by a highlight on `entry`.
///
/// Stacked entries use the whole stack when `full_bar` is set, otherwise the
/// selected segment's range (`(0, 0)` when the segment does not exist).
#[must_use]
pub fn highlight_value_span(
    entry: &BarEntry,
    stack_index: Option<usize>,
    full_bar: bool,
) -> (f64, f64) {
    match stack_index {
        Some(index) if entry.is_stacked() => {
            if full_bar {
                (entry.positive_sum(), -entry.negative_sum())
            } else {
                entry
                    .ranges()
                    .and_then(|ranges| ranges.get(index))
                    .map_or((0.0, 0.0), |range| (range.from, range.to))
            }
        }
        _ => (entry.y, 0.0),
    }
}

/// Segment a highlight resolves to, or `None` when it covers the whole bar.
#[must_use]
pub fn highlight_segment(
    entry: &BarEntry,
    stack_index: Option<usize>,
    full_bar: bool,
) -> Option<usize> {
    stack_index.filter(|_| entry.is_stacked() && !full_bar)
}

/// Builds the pixel rect spanning `[y1, y2]` around `x`, scaled by `phase_y`.
#[must_use]
pub fn prepare_bar_highlight(
    x: f64,
    y1: f64,
    y2: f64,
    bar_width_half: f64,
    transformer: &dyn CoordinateTransform,
    phase_y: f64,
) -> BarRect {
    let rect = BarRect::new(x - bar_width_half, y1, x + bar_width_half, y2);
    transformer.rect_value_to_pixel_with_phase(rect, phase_y)
}

/// Full highlight geometry for `entry`.
#[must_use]
pub fn bar_highlight_geometry(
    entry: &BarEntry,
    highlight: &Highlight,
    full_bar: bool,
    bar_width_half: f64,
    transformer: &dyn CoordinateTransform,
    phase_y: f64,
) -> HighlightGeometry {
    let (y1, y2) = highlight_value_span(entry, highlight.stack_index, full_bar);
    let rect = prepare_bar_highlight(entry.x, y1, y2, bar_width_half, transformer, phase_y);
    HighlightGeometry {
        rect,
        draw_position: PixelPoint::new(rect.mid_x(), rect.top),
        segment: highlight_segment(entry, highlight.stack_index, full_bar),
    }
}

#[cfg(test)]
mod tests {
    use super::{highlight_segment, highlight_value_span};
    use crate::core::BarEntry;

    #[test]
    fn plain_entry_spans_value_to_baseline() {
        let entry = BarEntry::new(0.0, 3.5).expect("entry");
        assert_eq!(highlight_value_span(&entry, Some(1), true), (3.5, 0.0));
        assert_eq!(highlight_value_span(&entry, None, false), (3.5, 0.0));
        assert_eq!(highlight_segment(&entry, Some(1), false), None);
    }

    #[test]
    fn missing_segment_falls_back_to_zero_span() {
        let entry = BarEntry::stacked(0.0, vec![1.0, 2.0]).expect("entry");
        assert_eq!(highlight_value_span(&entry, Some(5), false), (0.0, 0.0));
    }

    #[test]
    fn stacked_entry_without_segment_uses_aggregate() {
        let entry = BarEntry::stacked(0.0, vec![1.0, 2.0]).expect("entry");
        assert_eq!(highlight_value_span(&entry, None, true), (3.0, 0.0));
    }
}
