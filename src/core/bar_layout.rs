//! Value-space layout of bar rects.
//!
//! Rects are produced in entry order. Stacked entries contribute one rect per
//! stack component; every other entry contributes exactly one.

use tracing::trace;

use crate::core::{AnimationPhase, BarBuffer, BarChartDataSet, BarEntry, BarRect};
use crate::error::{ChartError, ChartResult};

/// Per-frame inputs shared by every rect of one data set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayoutParams {
    pub bar_width_half: f64,
    pub inverted: bool,
    pub phase: AnimationPhase,
}

impl BarLayoutParams {
    pub fn new(bar_width: f64, inverted: bool, phase: AnimationPhase) -> ChartResult<Self> {
        if !bar_width.is_finite() || bar_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            bar_width_half: bar_width / 2.0,
            inverted,
            phase,
        })
    }
}

/// Fills `buffer` with the value-space rects of the revealed entries.
///
/// The buffer must have been sized for `data_set` by
/// [`BarBufferSet::init_buffers`](crate::core::BarBufferSet::init_buffers).
pub fn prepare_buffer(
    buffer: &mut BarBuffer,
    data_set: &BarChartDataSet,
    params: BarLayoutParams,
) -> ChartResult<()> {
    if buffer.len() != data_set.buffer_size() {
        return Err(ChartError::InvalidData(format!(
            "bar buffer holds {} rects but data set `{}` needs {}",
            buffer.len(),
            data_set.label,
            data_set.buffer_size()
        )));
    }

    buffer.clear_layout();
    let contains_stacks = data_set.is_stacked();
    let visible = params.phase.visible_entry_count(data_set.entry_count());

    let mut buffer_index = 0;
    for entry in &data_set.entries()[..visible] {
        match entry.y_values() {
            Some(values) if contains_stacks => {
                buffer_index = push_stack(buffer, buffer_index, entry, values, params)?;
            }
            _ => {
                *rect_slot(buffer, buffer_index)? = single_bar_rect(entry.x, entry.y, params);
                buffer.stack_top_indices.insert(buffer_index);
                buffer.stack_bottom_indices.insert(buffer_index);
                buffer
                    .gradient_colors
                    .push(entry.linear_gradient_colors.clone());
                buffer_index += 1;
            }
        }
    }
    buffer.filled = buffer_index;

    trace!(
        data_set = %data_set.label,
        visible_entries = visible,
        rects = buffer_index,
        "prepared bar buffer"
    );
    Ok(())
}

/// Rect of a bar anchored at the zero baseline.
///
/// Only the edge away from the baseline is scaled by `phase_y`, so the bar
/// grows out of the baseline.
#[must_use]
pub fn single_bar_rect(x: f64, y: f64, params: BarLayoutParams) -> BarRect {
    let (mut top, mut bottom) = value_edges(y, 0.0, params.inverted);
    if top > 0.0 {
        top *= params.phase.phase_y();
    } else {
        bottom *= params.phase.phase_y();
    }
    BarRect::new(
        x - params.bar_width_half,
        top,
        x + params.bar_width_half,
        bottom,
    )
}

/// Value span of every component of a stack, in component order.
///
/// A zero component is collapsed onto the baseline whenever either running
/// sum is still zero, so it never spans a neighbouring segment.
#[must_use]
pub fn stack_segments(values: &[f64], negative_sum: f64) -> Vec<(f64, f64)> {
    let mut pos_y = 0.0;
    let mut neg_y = -negative_sum;
    values
        .iter()
        .map(|value| {
            let value = *value;
            if value == 0.0 && (pos_y == 0.0 || neg_y == 0.0) {
                (value, value)
            } else if value >= 0.0 {
                let start = pos_y;
                pos_y += value;
                (start, pos_y)
            } else {
                let start = neg_y;
                neg_y += value.abs();
                (start, neg_y)
            }
        })
        .collect()
}

fn push_stack(
    buffer: &mut BarBuffer,
    mut buffer_index: usize,
    entry: &BarEntry,
    values: &[f64],
    params: BarLayoutParams,
) -> ChartResult<usize> {
    let phase_y = params.phase.phase_y();
    let last = values.len().saturating_sub(1);
    for (k, (y, y_start)) in stack_segments(values, entry.negative_sum())
        .into_iter()
        .enumerate()
    {
        let (top, bottom) = value_edges(y, y_start, params.inverted);
        *rect_slot(buffer, buffer_index)? = BarRect::new(
            entry.x - params.bar_width_half,
            top * phase_y,
            entry.x + params.bar_width_half,
            bottom * phase_y,
        );

        // First component sits on the baseline side of the stack.
        if k == 0 {
            lower_edge_set(buffer, params.inverted).insert(buffer_index);
        }
        if k == last {
            upper_edge_set(buffer, params.inverted).insert(buffer_index);
        }
        buffer
            .gradient_colors
            .push(entry.linear_gradient_colors.clone());
        buffer_index += 1;
    }
    Ok(buffer_index)
}

fn rect_slot(buffer: &mut BarBuffer, index: usize) -> ChartResult<&mut BarRect> {
    let len = buffer.rects.len();
    buffer.rects.get_mut(index).ok_or_else(|| {
        ChartError::InvalidData(format!(
            "bar buffer of {len} rects has no slot {index}; stack size is stale"
        ))
    })
}

fn lower_edge_set(buffer: &mut BarBuffer, inverted: bool) -> &mut indexmap::IndexSet<usize> {
    if inverted {
        &mut buffer.stack_top_indices
    } else {
        &mut buffer.stack_bottom_indices
    }
}

fn upper_edge_set(buffer: &mut BarBuffer, inverted: bool) -> &mut indexmap::IndexSet<usize> {
    if inverted {
        &mut buffer.stack_bottom_indices
    } else {
        &mut buffer.stack_top_indices
    }
}

/// Orders two value-space edges into `(top, bottom)` for the axis orientation.
#[must_use]
pub fn value_edges(a: f64, b: f64, inverted: bool) -> (f64, f64) {
    if inverted {
        (a.min(b), a.max(b))
    } else {
        (a.max(b), a.min(b))
    }
}

#[cfg(test)]
mod tests {
    use super::{BarLayoutParams, prepare_buffer, single_bar_rect, stack_segments, value_edges};
    use crate::core::{AnimationPhase, BarBuffer, BarChartDataSet, BarEntry};

    fn params(inverted: bool, phase_y: f64) -> BarLayoutParams {
        BarLayoutParams::new(
            0.5,
            inverted,
            AnimationPhase::new(1.0, phase_y).expect("phase"),
        )
        .expect("params")
    }

    #[test]
    fn edges_follow_axis_orientation() {
        assert_eq!(value_edges(5.0, 0.0, false), (5.0, 0.0));
        assert_eq!(value_edges(5.0, 0.0, true), (0.0, 5.0));
        assert_eq!(value_edges(-3.0, 0.0, false), (0.0, -3.0));
    }

    #[test]
    fn negative_bar_scales_bottom_edge() {
        let rect = single_bar_rect(1.0, -4.0, params(false, 0.5));
        assert!((rect.top - 0.0).abs() <= 1e-12);
        assert!((rect.bottom + 2.0).abs() <= 1e-12);
        assert!((rect.left - 0.75).abs() <= 1e-12);
        assert!((rect.right - 1.25).abs() <= 1e-12);
    }

    #[test]
    fn inverted_positive_bar_scales_bottom_edge() {
        let rect = single_bar_rect(0.0, 6.0, params(true, 0.5));
        assert!((rect.top - 0.0).abs() <= 1e-12);
        assert!((rect.bottom - 3.0).abs() <= 1e-12);
    }

    #[test]
    fn zero_component_after_negative_collapses_only_with_zero_sum() {
        // pos_y == 0 and neg_y == -2: guard applies.
        assert_eq!(stack_segments(&[0.0, -2.0], 2.0), vec![(0.0, 0.0), (-2.0, 0.0)]);
        // After a positive component with no negatives, neg_y is 0: guard applies.
        assert_eq!(stack_segments(&[1.0, 0.0], 0.0), vec![(0.0, 1.0), (0.0, 0.0)]);
        // Both accumulators non-zero: zero component sits on top of the positives.
        assert_eq!(
            stack_segments(&[1.0, -1.0, 0.0, -1.0], 2.0),
            vec![(0.0, 1.0), (-2.0, -1.0), (1.0, 1.0), (-1.0, 0.0)]
        );
    }

    #[test]
    fn stacked_rects_scale_both_edges() {
        let set = BarChartDataSet::new(
            "stack",
            vec![BarEntry::stacked(0.0, vec![2.0, 2.0]).expect("entry")],
        );
        let mut buffer = BarBuffer::with_size(set.buffer_size());
        prepare_buffer(&mut buffer, &set, params(false, 0.5)).expect("prepare");
        let rects = buffer.rects();
        assert!((rects[1].bottom - 1.0).abs() <= 1e-12);
        assert!((rects[1].top - 2.0).abs() <= 1e-12);
    }

    #[test]
    fn stacked_set_with_plain_entry_tags_it_on_both_edges() {
        let set = BarChartDataSet::new(
            "mixed",
            vec![
                BarEntry::new(0.0, 3.0).expect("entry"),
                BarEntry::stacked(1.0, vec![1.0, 1.0]).expect("entry"),
            ],
        );
        let mut buffer = BarBuffer::with_size(set.buffer_size());
        prepare_buffer(&mut buffer, &set, params(false, 1.0)).expect("prepare");
        assert_eq!(buffer.filled(), 3);
        assert!(buffer.is_stack_top(0) && buffer.is_stack_bottom(0));
        assert!(buffer.is_stack_bottom(1) && !buffer.is_stack_top(1));
        assert!(buffer.is_stack_top(2) && !buffer.is_stack_bottom(2));
    }

    #[test]
    fn rejects_unsized_buffer() {
        let set = BarChartDataSet::new("one", vec![BarEntry::new(0.0, 1.0).expect("entry")]);
        let mut buffer = BarBuffer::default();
        assert!(prepare_buffer(&mut buffer, &set, params(false, 1.0)).is_err());
    }
}
