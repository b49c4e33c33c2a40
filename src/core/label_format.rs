/// Largest magnitude that still formats through the integer path.
const INTEGER_LABEL_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Formats a gridline value: whole numbers without a fractional part, any
/// other value with exactly one decimal place.
#[must_use]
pub fn format_step_label(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= INTEGER_LABEL_LIMIT {
        return format!("{}", value as i64);
    }
    format!("{value:.1}")
}
