use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

pub fn ensure_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!("{field_name} must be finite")))
    }
}

/// Truncates to two decimals, matching the pixel-snapping used by bounds checks.
#[must_use]
pub fn floor_to_hundredths(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{decimal_to_f64, ensure_finite, floor_to_hundredths};
    use rust_decimal::Decimal;

    #[test]
    fn decimal_conversion_keeps_value() {
        let value = decimal_to_f64(Decimal::new(1250, 2), "value").expect("convert");
        assert!((value - 12.5).abs() <= 1e-12);
    }

    #[test]
    fn ensure_finite_names_the_field() {
        let err = ensure_finite(f64::NAN, "bar width").expect_err("nan rejected");
        assert!(format!("{err}").contains("bar width"));
    }

    #[test]
    fn hundredths_floor_truncates_towards_negative_infinity() {
        assert!((floor_to_hundredths(10.129) - 10.12).abs() <= 1e-9);
        assert!((floor_to_hundredths(-0.001) + 0.01).abs() <= 1e-9);
    }
}
