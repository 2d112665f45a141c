use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear mapping between a value domain and an arbitrary pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps `value` onto `[range_start, range_end]`.
    ///
    /// Values outside the domain extrapolate linearly.
    #[must_use]
    pub fn domain_to_range(self, value: f64, range_start: f64, range_end: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        range_start + normalized * (range_end - range_start)
    }

    #[must_use]
    pub fn range_to_domain(self, pixel: f64, range_start: f64, range_end: f64) -> f64 {
        let normalized = (pixel - range_start) / (range_end - range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn rejects_degenerate_domain() {
        assert!(LinearScale::new(1.0, 1.0).is_err());
        assert!(LinearScale::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn maps_onto_reversed_range() {
        let scale = LinearScale::new(0.0, 10.0).expect("scale");
        assert!((scale.domain_to_range(0.0, 100.0, 0.0) - 100.0).abs() <= 1e-9);
        assert!((scale.domain_to_range(2.5, 100.0, 0.0) - 75.0).abs() <= 1e-9);
        assert!((scale.range_to_domain(75.0, 100.0, 0.0) - 2.5).abs() <= 1e-9);
    }
}
