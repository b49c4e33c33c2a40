use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{GraphError, GraphResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> GraphResult<f64> {
    value.to_f64().ok_or_else(|| {
        GraphError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Short `M.DD` label used for day-granular measurement logs, e.g. `4.07`.
#[must_use]
pub fn month_day_label(date: NaiveDate) -> String {
    format!("{}.{:02}", date.month(), date.day())
}

/// Rounds half-way cases up (`floor(x + 0.5)`), unlike `f64::round` which
/// rounds them away from zero.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::{month_day_label, round_half_up};
    use chrono::NaiveDate;

    #[test]
    fn round_half_up_differs_from_round_for_negative_halves() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!((-2.5f64).round(), -3.0);
    }

    #[test]
    fn month_day_label_pads_day_only() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 7).expect("valid date");
        assert_eq!(month_day_label(date), "4.07");
        let date = NaiveDate::from_ymd_opt(2024, 12, 28).expect("valid date");
        assert_eq!(month_day_label(date), "12.28");
    }
}
