use serde::{Deserialize, Serialize};

use crate::core::plot_geometry::{
    DEFAULT_BOTTOM_BAND_PX, DEFAULT_DOT_RADIUS_PX, DEFAULT_LABEL_GUTTER_PX,
    DEFAULT_LEADING_MARGIN_PX,
};
use crate::core::{GraphFrame, PlotGeometry, VALUE_MAX_COUNT};
use crate::error::{GraphError, GraphResult};
use crate::render::Color;

/// Smallest graph height the container ever lays out.
pub const MIN_GRAPH_HEIGHT_PX: f64 = 240.0;

const PINK: Color = Color::rgb(1.0, 0.176, 0.333);
const GRAY: Color = Color::rgb(0.557, 0.557, 0.576);
const PURPLE: Color = Color::rgb(0.686, 0.322, 0.871);

/// Outer padding around the graph frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f64,
    pub leading: f64,
    pub bottom: f64,
    pub trailing: f64,
}

impl EdgeInsets {
    #[must_use]
    pub const fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.leading + self.trailing
    }
}

impl Default for EdgeInsets {
    fn default() -> Self {
        Self::new(20.0, 25.0, 20.0, 25.0)
    }
}

/// Fixed margins subtracted inside the graph frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub label_gutter_px: f64,
    pub bottom_band_px: f64,
    pub leading_margin_px: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            label_gutter_px: DEFAULT_LABEL_GUTTER_PX,
            bottom_band_px: DEFAULT_BOTTOM_BAND_PX,
            leading_margin_px: DEFAULT_LEADING_MARGIN_PX,
        }
    }
}

/// Colors and stroke sizes used by the render-frame builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphStyle {
    pub line_color: Color,
    pub dot_color: Color,
    pub fill_top_color: Color,
    pub fill_bottom_color: Color,
    pub grid_line_color: Color,
    pub grid_label_color: Color,
    pub tick_color: Color,
    pub tick_label_color: Color,
    pub line_width_px: f64,
    pub grid_line_width_px: f64,
    pub font_size_px: f64,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            line_color: PINK,
            dot_color: PINK,
            fill_top_color: PINK.with_alpha(0.56),
            fill_bottom_color: PINK.with_alpha(0.3),
            grid_line_color: GRAY.with_alpha(0.7),
            grid_label_color: GRAY.with_alpha(0.7),
            tick_color: GRAY.with_alpha(0.7),
            tick_label_color: PURPLE.with_alpha(0.7),
            line_width_px: 1.0,
            grid_line_width_px: 1.0,
            font_size_px: 12.0,
        }
    }
}

impl GraphStyle {
    pub fn validate(&self) -> GraphResult<()> {
        for color in [
            self.line_color,
            self.dot_color,
            self.fill_top_color,
            self.fill_bottom_color,
            self.grid_line_color,
            self.grid_label_color,
            self.tick_color,
            self.tick_label_color,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("line_width_px", self.line_width_px),
            ("grid_line_width_px", self.grid_line_width_px),
            ("font_size_px", self.font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraphError::InvalidConfig(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

/// Public graph configuration.
///
/// Serializable so hosts can persist graph setup; missing fields fall back
/// to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineGraphConfig {
    #[serde(default = "default_graph_height_px")]
    pub graph_height_px: f64,
    #[serde(default)]
    pub padding: EdgeInsets,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default = "default_dot_radius_px")]
    pub dot_radius_px: f64,
    #[serde(default = "default_max_value_count")]
    pub max_value_count: usize,
    #[serde(default)]
    pub style: GraphStyle,
}

impl Default for LineGraphConfig {
    fn default() -> Self {
        Self {
            graph_height_px: default_graph_height_px(),
            padding: EdgeInsets::default(),
            margins: PlotMargins::default(),
            dot_radius_px: default_dot_radius_px(),
            max_value_count: default_max_value_count(),
            style: GraphStyle::default(),
        }
    }
}

impl LineGraphConfig {
    /// Sets the requested graph height; layout never goes below
    /// [`MIN_GRAPH_HEIGHT_PX`].
    #[must_use]
    pub fn with_graph_height(mut self, graph_height_px: f64) -> Self {
        self.graph_height_px = graph_height_px;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_dot_radius(mut self, dot_radius_px: f64) -> Self {
        self.dot_radius_px = dot_radius_px;
        self
    }

    #[must_use]
    pub fn with_max_value_count(mut self, max_value_count: usize) -> Self {
        self.max_value_count = max_value_count;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: GraphStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn effective_graph_height(&self) -> f64 {
        self.graph_height_px.max(MIN_GRAPH_HEIGHT_PX)
    }

    /// Graph frame inside `container_width` after horizontal padding.
    #[must_use]
    pub fn frame_for_width(&self, container_width: f64) -> GraphFrame {
        let width = if container_width.is_finite() {
            (container_width - self.padding.horizontal()).max(0.0)
        } else {
            0.0
        };
        GraphFrame::new(width, self.effective_graph_height())
    }

    #[must_use]
    pub fn plot_geometry(&self, container_width: f64) -> PlotGeometry {
        PlotGeometry::new(self.frame_for_width(container_width))
            .with_margins(
                self.margins.label_gutter_px,
                self.margins.bottom_band_px,
                self.margins.leading_margin_px,
            )
            .with_dot_radius(self.dot_radius_px)
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.graph_height_px.is_finite() || self.graph_height_px <= 0.0 {
            return Err(GraphError::InvalidConfig(
                "graph height must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("padding.top", self.padding.top),
            ("padding.leading", self.padding.leading),
            ("padding.bottom", self.padding.bottom),
            ("padding.trailing", self.padding.trailing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.dot_radius_px.is_finite() || self.dot_radius_px <= 0.0 {
            return Err(GraphError::InvalidConfig(
                "dot radius must be finite and > 0".to_owned(),
            ));
        }
        if self.max_value_count == 0 {
            return Err(GraphError::InvalidConfig(
                "max value count must be > 0".to_owned(),
            ));
        }
        self.plot_geometry(0.0).validate()?;
        self.style.validate()
    }

    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a config.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_graph_height_px() -> f64 {
    MIN_GRAPH_HEIGHT_PX
}

fn default_dot_radius_px() -> f64 {
    DEFAULT_DOT_RADIUS_PX
}

fn default_max_value_count() -> usize {
    VALUE_MAX_COUNT
}
