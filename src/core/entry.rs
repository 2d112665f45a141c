use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::{decimal_to_f64, ensure_finite};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Gradient stops attached to one bar; fewer than two stops means solid fill.
pub type GradientColors = SmallVec<[Color; 2]>;

/// Value span `[from, to]` covered by one stack segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackRange {
    pub from: f64,
    pub to: f64,
}

impl StackRange {
    #[must_use]
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }
}

/// One bar: either a single value or an ordered stack of components.
///
/// Sums and ranges are derived data; deserialization recomputes them from
/// `x`, `y` and `y_values`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBarEntry")]
pub struct BarEntry {
    pub x: f64,
    pub y: f64,
    y_values: Option<Vec<f64>>,
    ranges: Option<Vec<StackRange>>,
    positive_sum: f64,
    negative_sum: f64,
    #[serde(default)]
    pub linear_gradient_colors: GradientColors,
}

#[derive(Deserialize)]
struct RawBarEntry {
    x: f64,
    y: f64,
    #[serde(default)]
    y_values: Option<Vec<f64>>,
    #[serde(default)]
    linear_gradient_colors: GradientColors,
}

impl TryFrom<RawBarEntry> for BarEntry {
    type Error = ChartError;

    fn try_from(raw: RawBarEntry) -> ChartResult<Self> {
        let entry = match raw.y_values {
            Some(values) => Self::stacked(raw.x, values)?,
            None => Self::new(raw.x, raw.y)?,
        };
        entry.with_gradient(raw.linear_gradient_colors)
    }
}

impl BarEntry {
    pub fn new(x: f64, y: f64) -> ChartResult<Self> {
        Ok(Self {
            x: ensure_finite(x, "entry x")?,
            y: ensure_finite(y, "entry y")?,
            y_values: None,
            ranges: None,
            positive_sum: 0.0,
            negative_sum: 0.0,
            linear_gradient_colors: GradientColors::new(),
        })
    }

    /// Builds a stacked entry; `y` becomes the sum of `values`.
    pub fn stacked(x: f64, values: Vec<f64>) -> ChartResult<Self> {
        ensure_finite(x, "entry x")?;
        if values.is_empty() {
            return Err(ChartError::InvalidData(
                "stacked entry requires at least one value".to_owned(),
            ));
        }
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "stack values must be finite".to_owned(),
            ));
        }

        let (positive_sum, negative_sum) = stack_sums(&values);
        let ranges = stack_ranges(&values, negative_sum);
        Ok(Self {
            x,
            y: values.iter().sum(),
            y_values: Some(values),
            ranges: Some(ranges),
            positive_sum,
            negative_sum,
            linear_gradient_colors: GradientColors::new(),
        })
    }

    pub fn from_decimal(x: f64, y: Decimal) -> ChartResult<Self> {
        Self::new(x, decimal_to_f64(y, "entry y")?)
    }

    pub fn stacked_from_decimals(x: f64, values: &[Decimal]) -> ChartResult<Self> {
        let values = values
            .iter()
            .map(|value| decimal_to_f64(*value, "stack value"))
            .collect::<ChartResult<Vec<_>>>()?;
        Self::stacked(x, values)
    }

    pub fn with_gradient(mut self, colors: impl IntoIterator<Item = Color>) -> ChartResult<Self> {
        let colors: GradientColors = colors.into_iter().collect();
        for color in &colors {
            color.validate()?;
        }
        self.linear_gradient_colors = colors;
        Ok(self)
    }

    #[must_use]
    pub fn y_values(&self) -> Option<&[f64]> {
        self.y_values.as_deref()
    }

    #[must_use]
    pub fn ranges(&self) -> Option<&[StackRange]> {
        self.ranges.as_deref()
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.y_values.is_some()
    }

    #[must_use]
    pub fn stack_len(&self) -> usize {
        self.y_values.as_ref().map_or(1, Vec::len)
    }

    #[must_use]
    pub fn positive_sum(&self) -> f64 {
        self.positive_sum
    }

    /// Magnitude of all negative components (always `>= 0`).
    #[must_use]
    pub fn negative_sum(&self) -> f64 {
        self.negative_sum
    }
}

fn stack_sums(values: &[f64]) -> (f64, f64) {
    values.iter().fold((0.0, 0.0), |(pos, neg), value| {
        if *value <= 0.0 {
            (pos, neg + value.abs())
        } else {
            (pos + value, neg)
        }
    })
}

fn stack_ranges(values: &[f64], negative_sum: f64) -> Vec<StackRange> {
    let mut neg_remain = -negative_sum;
    let mut pos_remain = 0.0;
    values
        .iter()
        .map(|value| {
            if *value < 0.0 {
                let range = StackRange::new(neg_remain, neg_remain - value);
                neg_remain -= value;
                range
            } else {
                let range = StackRange::new(pos_remain, pos_remain + value);
                pos_remain += value;
                range
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{BarEntry, StackRange};
    use crate::render::Color;

    #[test]
    fn stacked_entry_precomputes_sums_and_ranges() {
        let entry = BarEntry::stacked(1.0, vec![3.0, -2.0, 4.0]).expect("entry");
        assert!((entry.y - 5.0).abs() <= 1e-12);
        assert!((entry.positive_sum() - 7.0).abs() <= 1e-12);
        assert!((entry.negative_sum() - 2.0).abs() <= 1e-12);
        assert_eq!(
            entry.ranges().expect("ranges"),
            &[
                StackRange::new(0.0, 3.0),
                StackRange::new(-2.0, 0.0),
                StackRange::new(3.0, 7.0),
            ]
        );
    }

    #[test]
    fn deserialization_recomputes_derived_sums() {
        let mut value =
            serde_json::to_value(BarEntry::stacked(1.0, vec![3.0, -2.0]).expect("entry"))
                .expect("serialize");
        value["positive_sum"] = serde_json::json!(100.0);
        value["ranges"] = serde_json::json!([]);

        let entry: BarEntry = serde_json::from_value(value).expect("deserialize");
        assert!((entry.positive_sum() - 3.0).abs() <= 1e-12);
        assert_eq!(entry.ranges().expect("ranges").len(), 2);

        let bad = serde_json::json!({ "x": 0.0, "y": 0.0, "y_values": [] });
        assert!(serde_json::from_value::<BarEntry>(bad).is_err());
    }

    #[test]
    fn plain_entry_has_no_stack() {
        let entry = BarEntry::new(0.0, -4.0).expect("entry");
        assert!(!entry.is_stacked());
        assert_eq!(entry.stack_len(), 1);
        assert!(entry.ranges().is_none());
    }

    #[test]
    fn rejects_empty_or_non_finite_stacks() {
        assert!(BarEntry::stacked(0.0, Vec::new()).is_err());
        assert!(BarEntry::stacked(0.0, vec![1.0, f64::INFINITY]).is_err());
        assert!(BarEntry::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn gradient_colors_are_validated() {
        let bad = BarEntry::new(0.0, 1.0)
            .expect("entry")
            .with_gradient([Color::rgba(2.0, 0.0, 0.0, 1.0)]);
        assert!(bad.is_err());

        let good = BarEntry::new(0.0, 1.0)
            .expect("entry")
            .with_gradient([Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)])
            .expect("gradient");
        assert_eq!(good.linear_gradient_colors.len(), 2);
    }
}
