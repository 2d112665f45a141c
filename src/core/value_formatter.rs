use std::fmt;

use crate::core::BarEntry;

/// Turns a bar value into label text.
pub trait ValueFormatter: fmt::Debug + Send + Sync {
    fn format(&self, value: f64, entry: &BarEntry, data_set_index: usize) -> String;
}

/// Fixed-precision formatter used when a data set has none configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultValueFormatter {
    pub decimals: usize,
}

impl Default for DefaultValueFormatter {
    fn default() -> Self {
        Self { decimals: 1 }
    }
}

impl DefaultValueFormatter {
    #[must_use]
    pub const fn new(decimals: usize) -> Self {
        Self { decimals }
    }
}

impl ValueFormatter for DefaultValueFormatter {
    fn format(&self, value: f64, _entry: &BarEntry, _data_set_index: usize) -> String {
        format!("{value:.prec$}", prec = self.decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::{DefaultValueFormatter, ValueFormatter};
    use crate::core::BarEntry;

    #[test]
    fn default_formatter_uses_configured_precision() {
        let entry = BarEntry::new(0.0, 1.0).expect("entry");
        assert_eq!(DefaultValueFormatter::default().format(2.345, &entry, 0), "2.3");
        assert_eq!(DefaultValueFormatter::new(0).format(-7.6, &entry, 0), "-8");
    }
}
