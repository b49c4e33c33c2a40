//! line-graph: axis scaling and coordinate projection for small line graphs.
//!
//! The crate keeps a strict data-then-render split: `core` turns a snapshot
//! of values into gridlines, tick labels and vertex lists, `render` describes
//! backend-agnostic draw commands, and `api` is the outer container that owns
//! configuration, truncation policy and the renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{LineGraph, LineGraphConfig};
pub use error::{GraphError, GraphResult};
