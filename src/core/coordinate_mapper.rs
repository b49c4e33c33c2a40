use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::axis_scaler::MAX_STEP_COUNT;
use crate::core::label_format::format_step_label;
use crate::core::{PlotGeometry, StepInfo};

/// Gridlines below this pixel offset above the frame top are still kept.
const GRID_TOP_TOLERANCE_PX: f64 = 1e-9;

/// Inline capacity covering every gridline a clamped step count can emit.
pub const GRID_LINE_INLINE: usize = MAX_STEP_COUNT + 1;

pub type GridLines = SmallVec<[GridLine; GRID_LINE_INLINE]>;

/// Pixel location of one data value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One horizontal reference line, counted from the bottom of the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub pixel_y: f64,
    pub value: f64,
    pub label: String,
}

/// Vertical tick mark and optional caption under one data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLabel {
    pub index: usize,
    pub x: f64,
    pub tick_top_y: f64,
    pub tick_bottom_y: f64,
    pub label_y: f64,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphProjection {
    pub points: Vec<ProjectedPoint>,
    pub grid_lines: GridLines,
    pub tick_labels: Vec<TickLabel>,
}

/// Projects values, gridlines and tick labels into the plot's pixel space.
///
/// `labels[i]` captions `values[i]`; missing entries become `None`.
#[must_use]
pub fn project(
    values: &[f64],
    labels: &[Option<String>],
    step_info: &StepInfo,
    geometry: &PlotGeometry,
) -> GraphProjection {
    GraphProjection {
        points: project_points(values, step_info, geometry),
        grid_lines: project_grid_lines(step_info, geometry),
        tick_labels: project_tick_labels(values.len(), labels, geometry),
    }
}

/// Maps each value to a point.
///
/// The vertical ratio is taken against the padded bounds in `step_info`, not
/// the raw data extent, which keeps the line inset from the plot edges.
/// Non-finite values and a zero-span scale project onto the basis line.
/// A geometry that is not drawable yields no points.
#[must_use]
pub fn project_points(
    values: &[f64],
    step_info: &StepInfo,
    geometry: &PlotGeometry,
) -> Vec<ProjectedPoint> {
    if !geometry.is_drawable() {
        return Vec::new();
    }
    let plot_height = geometry.plot_height();
    let span = step_info.value_span();
    let count = values.len();

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let ratio = if span > 0.0 && value.is_finite() {
                (value - step_info.lower_bound) / span
            } else {
                0.0
            };
            ProjectedPoint::new(
                geometry.x_at(index, count),
                plot_height - plot_height * ratio,
            )
        })
        .collect()
}

/// Builds gridlines for steps `0..=step_count`, bottom to top.
///
/// A zero step height yields exactly one line at the basis.
#[must_use]
pub fn project_grid_lines(step_info: &StepInfo, geometry: &PlotGeometry) -> GridLines {
    let mut lines = GridLines::new();
    if step_info.is_empty() || !geometry.is_drawable() {
        return lines;
    }

    let basis_y = geometry.basis_y();
    for step in 0..=step_info.step_count {
        let pixel_y = basis_y - step_info.step_height_px * step as f64;
        if pixel_y < -GRID_TOP_TOLERANCE_PX {
            break;
        }
        let value = step_info.lower_bound + step_info.step_value * step as f64;
        lines.push(GridLine {
            pixel_y: pixel_y.max(0.0),
            value,
            label: format_step_label(value),
        });
        if step_info.step_height_px <= 0.0 {
            break;
        }
    }
    lines
}

#[must_use]
pub fn project_tick_labels(
    point_count: usize,
    labels: &[Option<String>],
    geometry: &PlotGeometry,
) -> Vec<TickLabel> {
    if !geometry.is_drawable() {
        return Vec::new();
    }
    let basis_y = geometry.basis_y();
    let label_y = geometry.frame.height - geometry.tick_label_inset_px;

    (0..point_count)
        .map(|index| TickLabel {
            index,
            x: geometry.x_at(index, point_count),
            tick_top_y: basis_y - geometry.tick_half_length_px,
            tick_bottom_y: basis_y + geometry.tick_half_length_px,
            label_y,
            text: labels.get(index).cloned().flatten(),
        })
        .collect()
}
