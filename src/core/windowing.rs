use crate::core::GraphValue;

/// Default number of most recent values a graph keeps.
pub const VALUE_MAX_COUNT: usize = 20;

/// Returns the newest `max_count` entries, preserving order.
#[must_use]
pub fn latest_values(series: &[GraphValue], max_count: usize) -> &[GraphValue] {
    let start = series.len().saturating_sub(max_count);
    &series[start..]
}
