use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::primitives::round_half_up;

/// Fewest gridline steps ever produced for a non-empty series.
pub const MIN_STEP_COUNT: usize = 5;
/// Most gridline steps ever produced, regardless of data spread.
pub const MAX_STEP_COUNT: usize = 10;

/// Gridline layout derived from one snapshot of values.
///
/// For a non-empty series `upper_bound == lower_bound + step_value * step_count`
/// holds exactly, and the bounds always enclose every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    pub step_height_px: f64,
    pub step_value: f64,
    pub step_count: usize,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl StepInfo {
    /// Degenerate layout signalling "nothing to draw".
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            step_height_px: 0.0,
            step_value: 0.0,
            step_count: 0,
            lower_bound: 0.0,
            upper_bound: 0.0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.step_count == 0
    }

    #[must_use]
    pub fn value_span(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

impl Default for StepInfo {
    fn default() -> Self {
        Self::empty()
    }
}

/// Chooses integer-valued gridline steps for `values` over `plot_height_px`.
///
/// Bounds are padded to whole numbers (`floor(min - 0.5)` and
/// `floor(max + 1.5)`), the step count is clamped into
/// [`MIN_STEP_COUNT`, `MAX_STEP_COUNT`] and the step value is rounded to an
/// integer, after which the upper bound is re-derived from the other three
/// quantities. Non-finite values are ignored; a series without finite values
/// yields [`StepInfo::empty`].
#[must_use]
pub fn scale_steps(values: &[f64], plot_height_px: f64) -> StepInfo {
    let Some((min, max)) = finite_extent(values) else {
        return StepInfo::empty();
    };
    let plot_height_px = if plot_height_px.is_finite() {
        plot_height_px.max(0.0)
    } else {
        0.0
    };

    let lower_bound = (min - 0.5).floor();
    let upper_candidate = (max + 1.5).floor();
    let padded_span = upper_candidate - lower_bound;
    let data_span = max - min;

    // First pass goes through the pixel step; the float division can land
    // one below `padded_span`.
    let first_step_height = plot_height_px / padded_span;
    let mut step_count = if first_step_height > 0.0 {
        (plot_height_px / first_step_height).floor()
    } else {
        padded_span
    };
    let first_step_value = data_span / step_count;

    if first_step_value < 1.0 || step_count < 2.0 {
        step_count = round_half_up(data_span) + 2.0;
    }
    let step_count = step_count.clamp(MIN_STEP_COUNT as f64, MAX_STEP_COUNT as f64) as usize;

    let step_value = integer_step_value(lower_bound, padded_span, max, step_count);
    let upper_bound = lower_bound + step_value * step_count as f64;

    StepInfo {
        step_height_px: plot_height_px / step_count as f64,
        step_value,
        step_count,
        lower_bound,
        upper_bound,
    }
}

/// Rounds `padded_span / step_count` half-up to an integer, falling back to
/// the ceiling when the rounded step would be zero or stop short of `max`.
///
/// The result is at least 1; past 2^53 the padding is absorbed and
/// `padded_span` can be 0.
fn integer_step_value(lower_bound: f64, padded_span: f64, max: f64, step_count: usize) -> f64 {
    let count = step_count as f64;
    let raw = padded_span / count;
    let rounded = round_half_up(raw);
    if rounded > 0.0 && lower_bound + rounded * count >= max {
        rounded
    } else {
        raw.ceil().max(1.0)
    }
}

fn finite_extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut finite = values.iter().copied().filter(|value| value.is_finite());
    let first = OrderedFloat(finite.next()?);
    let (min, max) = finite.fold((first, first), |(min, max), value| {
        let value = OrderedFloat(value);
        (min.min(value), max.max(value))
    });
    Some((min.into_inner(), max.into_inner()))
}
