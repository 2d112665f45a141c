use serde::{Deserialize, Serialize};

use crate::core::{BarChartDataSet, ChartDataSet};
use crate::error::{ChartError, ChartResult};

/// Default bar width in x-value units.
pub const DEFAULT_BAR_WIDTH: f64 = 0.85;

/// Data container of a bar chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarData {
    data_sets: Vec<ChartDataSet>,
    bar_width: f64,
}

impl Default for BarData {
    fn default() -> Self {
        Self {
            data_sets: Vec::new(),
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl BarData {
    #[must_use]
    pub fn new(data_sets: Vec<ChartDataSet>) -> Self {
        Self {
            data_sets,
            ..Self::default()
        }
    }

    /// Convenience constructor for bar-only data.
    #[must_use]
    pub fn from_bar_sets(data_sets: Vec<BarChartDataSet>) -> Self {
        Self::new(data_sets.into_iter().map(ChartDataSet::Bar).collect())
    }

    pub fn with_bar_width(mut self, bar_width: f64) -> ChartResult<Self> {
        self.set_bar_width(bar_width)?;
        Ok(self)
    }

    pub fn set_bar_width(&mut self, bar_width: f64) -> ChartResult<()> {
        if !bar_width.is_finite() || bar_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        self.bar_width = bar_width;
        Ok(())
    }

    #[must_use]
    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }

    #[must_use]
    pub fn data_sets(&self) -> &[ChartDataSet] {
        &self.data_sets
    }

    #[must_use]
    pub fn data_set_count(&self) -> usize {
        self.data_sets.len()
    }

    pub fn add_data_set(&mut self, set: impl Into<ChartDataSet>) {
        self.data_sets.push(set.into());
    }

    pub fn remove_data_set(&mut self, index: usize) -> Option<ChartDataSet> {
        (index < self.data_sets.len()).then(|| self.data_sets.remove(index))
    }

    /// Mutable access to a bar data set, e.g. to replace its entries.
    pub fn bar_data_set_mut(&mut self, index: usize) -> ChartResult<&mut BarChartDataSet> {
        match self.data_sets.get_mut(index) {
            Some(ChartDataSet::Bar(set)) => Ok(set),
            Some(other) => Err(ChartError::IncompatibleDataSet {
                index,
                kind: other.kind(),
            }),
            None => Err(ChartError::InvalidData(format!(
                "data set index {index} out of range"
            ))),
        }
    }

    /// Returns every data set as a bar data set, failing on the first that is not.
    pub fn bar_data_sets(&self) -> ChartResult<Vec<&BarChartDataSet>> {
        self.data_sets
            .iter()
            .enumerate()
            .map(|(index, set)| set.as_bar(index))
            .collect()
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.data_sets
            .iter()
            .map(|set| match set {
                ChartDataSet::Bar(bar) => bar.entry_count(),
                ChartDataSet::Line(points) | ChartDataSet::Scatter(points) => points.points.len(),
            })
            .sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for set in self.bar_data_sets()? {
            set.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BarData, DEFAULT_BAR_WIDTH};
    use crate::core::{BarChartDataSet, BarEntry, ChartDataSet, DataPoint, PointDataSet};

    #[test]
    fn bar_width_defaults_and_validates() {
        let mut data = BarData::default();
        assert!((data.bar_width() - DEFAULT_BAR_WIDTH).abs() <= 1e-12);
        assert!(data.set_bar_width(0.0).is_err());
        assert!(data.set_bar_width(f64::NAN).is_err());
        data.set_bar_width(0.5).expect("width");
        assert!((data.bar_width() - 0.5).abs() <= 1e-12);
    }

    #[test]
    fn mixed_data_fails_bar_capability_check() {
        let mut data = BarData::from_bar_sets(vec![BarChartDataSet::new(
            "bars",
            vec![BarEntry::new(0.0, 1.0).expect("e")],
        )]);
        data.add_data_set(ChartDataSet::Scatter(PointDataSet::new(
            "dots",
            vec![DataPoint::new(0.0, 1.0)],
        )));
        assert!(data.bar_data_sets().is_err());
        assert!(data.bar_data_set_mut(1).is_err());
        assert!(data.bar_data_set_mut(0).is_ok());
        assert_eq!(data.entry_count(), 2);
    }
}
