use serde::{Deserialize, Serialize};

use crate::core::{PlotGeometry, ProjectedPoint, StepInfo};

/// Fixed-radius marker centered on one projected point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotMarker {
    pub center: ProjectedPoint,
    pub radius: f64,
}

impl DotMarker {
    /// Enclosing square as `(x, y, width, height)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let diameter = self.radius * 2.0;
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            diameter,
            diameter,
        )
    }
}

/// Vertex lists consumed by the render stage.
///
/// `peak_line` is an open polyline; `fill_outline` is explicitly closed (its
/// last vertex repeats the first).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphPaths {
    pub peak_line: Vec<ProjectedPoint>,
    pub fill_outline: Vec<ProjectedPoint>,
    pub dot_markers: Vec<DotMarker>,
}

impl GraphPaths {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.peak_line.is_empty() && self.fill_outline.is_empty() && self.dot_markers.is_empty()
    }
}

/// Derives all vertex lists; a single point has no line and yields empty paths.
#[must_use]
pub fn build_graph_paths(
    points: &[ProjectedPoint],
    step_info: &StepInfo,
    geometry: &PlotGeometry,
) -> GraphPaths {
    if points.len() < 2 {
        return GraphPaths::empty();
    }

    GraphPaths {
        peak_line: peak_line(points, step_info, geometry),
        fill_outline: fill_outline(points, step_info, geometry),
        dot_markers: dot_markers(points, geometry.dot_radius_px),
    }
}

/// Lead-in vertex at the label gutter, half a step above the first point.
fn lead_in(first: ProjectedPoint, step_info: &StepInfo, geometry: &PlotGeometry) -> ProjectedPoint {
    ProjectedPoint::new(
        geometry.label_gutter_px,
        first.y - step_info.step_height_px / 2.0,
    )
}

#[must_use]
pub fn peak_line(
    points: &[ProjectedPoint],
    step_info: &StepInfo,
    geometry: &PlotGeometry,
) -> Vec<ProjectedPoint> {
    if points.len() < 2 {
        return Vec::new();
    }
    let first = points[0];

    let mut path = Vec::with_capacity(points.len() + 1);
    path.push(lead_in(first, step_info, geometry));
    path.extend_from_slice(points);
    path
}

/// Closed outline: points, bottom-right, bottom-left, lead-in, first point.
#[must_use]
pub fn fill_outline(
    points: &[ProjectedPoint],
    step_info: &StepInfo,
    geometry: &PlotGeometry,
) -> Vec<ProjectedPoint> {
    if points.len() < 2 {
        return Vec::new();
    }
    let first = points[0];

    let basis_y = geometry.basis_y();
    let mut outline = Vec::with_capacity(points.len() + 4);
    outline.extend_from_slice(points);
    outline.push(ProjectedPoint::new(geometry.frame.width, basis_y));
    outline.push(ProjectedPoint::new(geometry.label_gutter_px, basis_y));
    outline.push(lead_in(first, step_info, geometry));
    outline.push(first);
    outline
}

#[must_use]
pub fn dot_markers(points: &[ProjectedPoint], radius: f64) -> Vec<DotMarker> {
    if points.len() < 2 {
        return Vec::new();
    }
    points
        .iter()
        .map(|&center| DotMarker { center, radius })
        .collect()
}
