//! Placement of value labels above, below, or inside bars.

use serde::{Deserialize, Serialize};

use crate::core::{
    AnimationPhase, BarBuffer, BarChartDataSet, CoordinateTransform, ValueFormatter,
    ViewPortHandler,
};
use crate::render::Color;

/// Vertical offsets applied to labels of positive and negative values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueLabelOffsets {
    pub positive: f64,
    pub negative: f64,
}

impl ValueLabelOffsets {
    #[must_use]
    pub fn resolve(text_height_px: f64, offset_px: f64, above_bar: bool, inverted: bool) -> Self {
        let outside = -(text_height_px + offset_px);
        let (mut positive, mut negative) = if above_bar {
            (outside, offset_px)
        } else {
            (offset_px, outside)
        };
        if inverted {
            positive = -positive - text_height_px;
            negative = -negative - text_height_px;
        }
        Self { positive, negative }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub entry_index: usize,
    /// Stack component index for labels of stacked entries.
    pub segment: Option<usize>,
    pub color: Color,
}

/// Everything label placement needs besides the data set and its buffer.
#[derive(Clone, Copy)]
pub struct ValueLabelContext<'a> {
    pub data_set_index: usize,
    pub phase: AnimationPhase,
    pub offsets: ValueLabelOffsets,
    pub transformer: &'a dyn CoordinateTransform,
    pub view_port: ViewPortHandler,
    pub formatter: &'a dyn ValueFormatter,
}

/// Lays out value labels for a data set whose buffer is already in pixel space.
#[must_use]
pub fn layout_value_labels(
    data_set: &BarChartDataSet,
    buffer: &BarBuffer,
    ctx: ValueLabelContext<'_>,
) -> Vec<ValueLabel> {
    let visible = ctx.phase.visible_entry_count(data_set.entry_count());
    if data_set.is_stacked() {
        stacked_labels(data_set, buffer, visible, ctx)
    } else {
        single_labels(data_set, buffer, visible, ctx)
    }
}

fn single_labels(
    data_set: &BarChartDataSet,
    buffer: &BarBuffer,
    visible: usize,
    ctx: ValueLabelContext<'_>,
) -> Vec<ValueLabel> {
    let mut labels = Vec::new();
    for (j, entry) in data_set.entries()[..visible].iter().enumerate() {
        let Some(rect) = buffer.rect(j) else { break };
        let x = rect.mid_x();
        if !ctx.view_port.is_in_bounds_right(x) {
            break;
        }
        if !ctx.view_port.is_in_bounds_y(rect.top) || !ctx.view_port.is_in_bounds_left(x) {
            continue;
        }
        let y = if entry.y >= 0.0 {
            rect.top + ctx.offsets.positive
        } else {
            rect.bottom + ctx.offsets.negative
        };
        labels.push(ValueLabel {
            text: ctx.formatter.format(entry.y, entry, ctx.data_set_index),
            x,
            y,
            value: entry.y,
            entry_index: j,
            segment: None,
            color: data_set.value_text_color_at(j),
        });
    }
    labels
}

fn stacked_labels(
    data_set: &BarChartDataSet,
    buffer: &BarBuffer,
    visible: usize,
    ctx: ValueLabelContext<'_>,
) -> Vec<ValueLabel> {
    let phase_y = ctx.phase.phase_y();
    let mut labels = Vec::new();
    let mut buffer_index = 0;

    'entries: for (index, entry) in data_set.entries()[..visible].iter().enumerate() {
        let Some(rect) = buffer.rect(buffer_index) else { break };
        let x = rect.mid_x();

        let Some(values) = entry.y_values() else {
            buffer_index += 1;
            if !ctx.view_port.is_in_bounds_right(x) {
                break;
            }
            if !ctx.view_port.is_in_bounds_y(rect.top) || !ctx.view_port.is_in_bounds_left(x) {
                continue;
            }
            let offset = if entry.y >= 0.0 {
                ctx.offsets.positive
            } else {
                ctx.offsets.negative
            };
            labels.push(ValueLabel {
                text: ctx.formatter.format(entry.y, entry, ctx.data_set_index),
                x,
                y: rect.top + offset,
                value: entry.y,
                entry_index: index,
                segment: None,
                color: data_set.value_text_color_at(index),
            });
            continue;
        };
        buffer_index += values.len();

        let mut pos_y = 0.0;
        let mut neg_y = -entry.negative_sum();
        let mut tops = Vec::with_capacity(values.len());
        for value in values {
            let value = *value;
            let y = if value == 0.0 && (pos_y == 0.0 || neg_y == 0.0) {
                value
            } else if value >= 0.0 {
                pos_y += value;
                pos_y
            } else {
                let y = neg_y;
                neg_y -= value;
                y
            };
            tops.push(ctx.transformer.value_to_pixel_y(y * phase_y));
        }

        for (k, (value, top)) in values.iter().copied().zip(tops).enumerate() {
            let draw_below = (value == 0.0 && neg_y == 0.0 && pos_y > 0.0) || value < 0.0;
            let y = top
                + if draw_below {
                    ctx.offsets.negative
                } else {
                    ctx.offsets.positive
                };
            if !ctx.view_port.is_in_bounds_right(x) {
                break 'entries;
            }
            if !ctx.view_port.is_in_bounds_y(y) || !ctx.view_port.is_in_bounds_left(x) {
                continue;
            }
            labels.push(ValueLabel {
                text: ctx.formatter.format(value, entry, ctx.data_set_index),
                x,
                y,
                value,
                entry_index: index,
                segment: Some(k),
                color: data_set.value_text_color_at(index),
            });
        }
    }
    labels
}
