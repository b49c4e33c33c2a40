use crate::core::{GraphLayout, PlotGeometry};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, RenderFrame, TextPrimitive, VerticalGradient,
};

use super::GraphStyle;

/// Turns a computed layout into draw commands.
///
/// Gridline labels are centered on the frame's left edge, tick captions on
/// their point's x. Empty tick captions produce no text.
#[must_use]
pub fn build_render_frame(
    layout: &GraphLayout,
    geometry: &PlotGeometry,
    style: &GraphStyle,
) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.frame);
    let right_x = layout.frame.width;

    if layout.paths.fill_outline.len() >= 3 {
        frame.polygons.push(PolygonPrimitive::new(
            layout.paths.fill_outline.clone(),
            VerticalGradient {
                top: style.fill_top_color,
                bottom: style.fill_bottom_color,
            },
        ));
    }

    for grid_line in &layout.grid_lines {
        frame.lines.push(LinePrimitive::new(
            geometry.label_gutter_px,
            grid_line.pixel_y,
            right_x,
            grid_line.pixel_y,
            style.grid_line_width_px,
            style.grid_line_color,
        ));
        frame.texts.push(TextPrimitive::new(
            grid_line.label.as_str(),
            0.0,
            grid_line.pixel_y,
            style.font_size_px,
            style.grid_label_color,
        ));
    }

    for tick in &layout.tick_labels {
        frame.lines.push(LinePrimitive::new(
            tick.x,
            tick.tick_top_y,
            tick.x,
            tick.tick_bottom_y,
            style.grid_line_width_px,
            style.tick_color,
        ));
        if let Some(text) = tick.text.as_deref().filter(|text| !text.is_empty()) {
            frame.texts.push(TextPrimitive::new(
                text,
                tick.x,
                tick.label_y,
                style.font_size_px,
                style.tick_label_color,
                ));
        }
    }

    for pair in layout.paths.peak_line.windows(2) {
        frame.lines.push(LinePrimitive::new(
            pair[0].x,
            pair[0].y,
            pair[1].x,
            pair[1].y,
            style.line_width_px,
            style.line_color,
        ));
    }

    for marker in &layout.paths.dot_markers {
        frame.circles.push(CirclePrimitive::new(
            marker.center.x,
            marker.center.y,
            marker.radius,
            style.dot_color,
        ));
    }

    frame
}
