use tracing::{debug, trace};

use crate::core::{GraphFrame, GraphLayout, GraphValue, PlotGeometry, latest_values, layout_graph};
use crate::error::GraphResult;
use crate::render::{RenderFrame, Renderer};

use super::{LineGraphConfig, build_render_frame};

/// Outer container consumed by host applications.
///
/// `LineGraph` owns the truncation policy (only the latest
/// `max_value_count` values are kept), the configuration and the renderer.
/// Every layout is recomputed from scratch; nothing is cached between passes.
pub struct LineGraph<R: Renderer> {
    renderer: R,
    config: LineGraphConfig,
    values: Vec<GraphValue>,
}

impl<R: Renderer> LineGraph<R> {
    pub fn new(renderer: R, config: LineGraphConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            values: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &LineGraphConfig {
        &self.config
    }

    /// Replaces the configuration and re-applies the value cap.
    pub fn set_config(&mut self, config: LineGraphConfig) -> GraphResult<()> {
        config.validate()?;
        self.config = config;
        self.enforce_value_cap();
        Ok(())
    }

    #[must_use]
    pub fn values(&self) -> &[GraphValue] {
        &self.values
    }

    /// Replaces the series, keeping only the newest `max_value_count` values.
    pub fn set_values(&mut self, values: Vec<GraphValue>) {
        let original_count = values.len();
        self.values = latest_values(&values, self.config.max_value_count).to_vec();
        debug!(
            original_count,
            kept_count = self.values.len(),
            "set graph values"
        );
    }

    /// Appends one value, dropping the oldest when over the cap.
    pub fn append_value(&mut self, value: GraphValue) {
        self.values.push(value);
        self.enforce_value_cap();
        trace!(count = self.values.len(), "append graph value");
    }

    #[must_use]
    pub fn frame_for_width(&self, container_width: f64) -> GraphFrame {
        self.config.frame_for_width(container_width)
    }

    #[must_use]
    pub fn plot_geometry(&self, container_width: f64) -> PlotGeometry {
        self.config.plot_geometry(container_width)
    }

    #[must_use]
    pub fn layout(&self, container_width: f64) -> GraphLayout {
        layout_graph(&self.values, &self.plot_geometry(container_width))
    }

    #[must_use]
    pub fn build_render_frame(&self, container_width: f64) -> RenderFrame {
        let geometry = self.plot_geometry(container_width);
        let layout = layout_graph(&self.values, &geometry);
        build_render_frame(&layout, &geometry, &self.config.style)
    }

    pub fn render(&mut self, container_width: f64) -> GraphResult<()> {
        let frame = self.build_render_frame(container_width);
        trace!(
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "render graph frame"
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn enforce_value_cap(&mut self) {
        let overflow = self
            .values
            .len()
            .saturating_sub(self.config.max_value_count);
        if overflow > 0 {
            self.values.drain(..overflow);
        }
    }
}
