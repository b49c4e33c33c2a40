pub mod axis_scaler;
pub mod coordinate_mapper;
pub mod graph_paths;
pub mod label_format;
pub mod layout;
pub mod plot_geometry;
pub mod primitives;
pub mod types;
pub mod windowing;

pub use axis_scaler::{MAX_STEP_COUNT, MIN_STEP_COUNT, StepInfo, scale_steps};
pub use coordinate_mapper::{
    GridLine, GridLines, GraphProjection, ProjectedPoint, TickLabel, project, project_grid_lines,
    project_points, project_tick_labels,
};
pub use graph_paths::{DotMarker, GraphPaths, build_graph_paths};
pub use label_format::format_step_label;
pub use layout::{GraphLayout, layout_graph};
pub use plot_geometry::PlotGeometry;
pub use types::{GraphFrame, GraphValue};
pub use windowing::{VALUE_MAX_COUNT, latest_values};
