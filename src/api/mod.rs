mod graph_config;
mod json_contract;
mod line_graph;
mod render_frame_builder;

pub use graph_config::{
    EdgeInsets, GraphStyle, LineGraphConfig, MIN_GRAPH_HEIGHT_PX, PlotMargins,
};
pub use json_contract::{GRAPH_LAYOUT_JSON_SCHEMA_V1, GraphLayoutJsonContractV1};
pub use line_graph::LineGraph;
pub use render_frame_builder::build_render_frame;
