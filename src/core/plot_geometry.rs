use serde::{Deserialize, Serialize};

use crate::core::GraphFrame;
use crate::error::{GraphError, GraphResult};

pub const DEFAULT_LABEL_GUTTER_PX: f64 = 30.0;
pub const DEFAULT_BOTTOM_BAND_PX: f64 = 40.0;
pub const DEFAULT_LEADING_MARGIN_PX: f64 = 20.0;
pub const DEFAULT_DOT_RADIUS_PX: f64 = 3.5;
pub const DEFAULT_TICK_HALF_LENGTH_PX: f64 = 7.5;
pub const DEFAULT_TICK_LABEL_INSET_PX: f64 = 12.0;

/// Frame plus the fixed margins the engine subtracts before computing steps.
///
/// Layout of the frame:
/// - `label_gutter_px` on the left holds gridline value labels
/// - `bottom_band_px` at the bottom holds per-point tick labels
/// - `leading_margin_px` separates the gutter from the first point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    pub frame: GraphFrame,
    pub label_gutter_px: f64,
    pub bottom_band_px: f64,
    pub leading_margin_px: f64,
    pub dot_radius_px: f64,
    pub tick_half_length_px: f64,
    pub tick_label_inset_px: f64,
}

impl PlotGeometry {
    #[must_use]
    pub fn new(frame: GraphFrame) -> Self {
        Self {
            frame,
            label_gutter_px: DEFAULT_LABEL_GUTTER_PX,
            bottom_band_px: DEFAULT_BOTTOM_BAND_PX,
            leading_margin_px: DEFAULT_LEADING_MARGIN_PX,
            dot_radius_px: DEFAULT_DOT_RADIUS_PX,
            tick_half_length_px: DEFAULT_TICK_HALF_LENGTH_PX,
            tick_label_inset_px: DEFAULT_TICK_LABEL_INSET_PX,
        }
    }

    #[must_use]
    pub fn with_margins(
        mut self,
        label_gutter_px: f64,
        bottom_band_px: f64,
        leading_margin_px: f64,
    ) -> Self {
        self.label_gutter_px = label_gutter_px;
        self.bottom_band_px = bottom_band_px;
        self.leading_margin_px = leading_margin_px;
        self
    }

    #[must_use]
    pub fn with_dot_radius(mut self, dot_radius_px: f64) -> Self {
        self.dot_radius_px = dot_radius_px;
        self
    }

    /// Vertical extent available for gridlines.
    #[must_use]
    pub fn plot_height(&self) -> f64 {
        non_negative(self.frame.height - self.bottom_band_px)
    }

    /// Y of the bottom gridline; pixel-y grows downward.
    #[must_use]
    pub fn basis_y(&self) -> f64 {
        self.plot_height()
    }

    /// X of the first data point.
    #[must_use]
    pub fn origin_x(&self) -> f64 {
        self.label_gutter_px + self.leading_margin_px
    }

    #[must_use]
    pub fn available_width(&self) -> f64 {
        non_negative(self.frame.width - self.label_gutter_px - self.leading_margin_px)
    }

    /// False when the frame leaves no room right of the gutter and leading
    /// margin; such a geometry lays out as an empty graph.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.frame.is_drawable() && self.available_width() > 0.0
    }

    /// Horizontal distance between consecutive points.
    ///
    /// Fewer than two points get the full available width so no division by
    /// zero can happen.
    #[must_use]
    pub fn step_width(&self, point_count: usize) -> f64 {
        if point_count < 2 {
            return self.available_width();
        }
        self.available_width() / (point_count - 1) as f64
    }

    #[must_use]
    pub fn x_at(&self, index: usize, point_count: usize) -> f64 {
        self.origin_x() + self.step_width(point_count) * index as f64
    }

    pub fn validate(&self) -> GraphResult<()> {
        let frame = self.frame;
        if !frame.width.is_finite()
            || !frame.height.is_finite()
            || frame.width < 0.0
            || frame.height < 0.0
        {
            return Err(GraphError::InvalidFrame {
                width: frame.width,
                height: frame.height,
            });
        }

        for (name, value) in [
            ("label_gutter_px", self.label_gutter_px),
            ("bottom_band_px", self.bottom_band_px),
            ("leading_margin_px", self.leading_margin_px),
            ("dot_radius_px", self.dot_radius_px),
            ("tick_half_length_px", self.tick_half_length_px),
            ("tick_label_inset_px", self.tick_label_inset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
