use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    GraphFrame, GraphPaths, GraphValue, GridLines, PlotGeometry, ProjectedPoint, StepInfo,
    TickLabel, build_graph_paths, project, scale_steps,
};

/// Everything the render stage needs for one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLayout {
    pub frame: GraphFrame,
    pub step_info: StepInfo,
    pub points: Vec<ProjectedPoint>,
    pub grid_lines: GridLines,
    pub tick_labels: Vec<TickLabel>,
    pub paths: GraphPaths,
}

impl GraphLayout {
    #[must_use]
    pub fn empty(frame: GraphFrame) -> Self {
        Self {
            frame,
            step_info: StepInfo::empty(),
            points: Vec::new(),
            grid_lines: GridLines::new(),
            tick_labels: Vec::new(),
            paths: GraphPaths::empty(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.grid_lines.is_empty() && self.tick_labels.is_empty()
    }
}

/// Runs the axis scaler once and the coordinate mapper once over `series`.
///
/// Pure: identical inputs give identical layouts. A geometry that is not
/// drawable collapses to an empty layout.
#[must_use]
pub fn layout_graph(series: &[GraphValue], geometry: &PlotGeometry) -> GraphLayout {
    if !geometry.is_drawable() {
        debug!(
            width = geometry.frame.width,
            height = geometry.frame.height,
            value_count = series.len(),
            "graph frame not drawable"
        );
        return GraphLayout::empty(geometry.frame);
    }

    let values: Vec<f64> = series.iter().map(|entry| entry.value).collect();
    let labels: Vec<Option<String>> = series.iter().map(|entry| entry.label.clone()).collect();

    let non_finite = values.iter().filter(|value| !value.is_finite()).count();
    if non_finite > 0 {
        warn!(
            non_finite,
            "non-finite graph values are projected onto the basis line"
        );
    }

    let step_info = scale_steps(&values, geometry.plot_height());
    let projection = project(&values, &labels, &step_info, geometry);
    let paths = build_graph_paths(&projection.points, &step_info, geometry);

    debug!(
        value_count = values.len(),
        step_count = step_info.step_count,
        step_value = step_info.step_value,
        lower_bound = step_info.lower_bound,
        upper_bound = step_info.upper_bound,
        "graph layout"
    );

    GraphLayout {
        frame: geometry.frame,
        step_info,
        points: projection.points,
        grid_lines: projection.grid_lines,
        tick_labels: projection.tick_labels,
        paths,
    }
}
