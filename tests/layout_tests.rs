use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use line_graph::core::{
    GraphFrame, GraphLayout, GraphValue, PlotGeometry, StepInfo, VALUE_MAX_COUNT, latest_values,
    layout_graph,
};
use rust_decimal::Decimal;

fn geometry() -> PlotGeometry {
    PlotGeometry::new(GraphFrame::new(350.0, 240.0))
}

#[test]
fn empty_series_lays_out_nothing() {
    let layout = layout_graph(&[], &geometry());

    assert!(layout.is_empty());
    assert!(layout.paths.is_empty());
    assert_eq!(layout.step_info, StepInfo::empty());
}

#[test]
fn frame_narrower_than_gutter_and_margin_lays_out_nothing() {
    let series: Vec<GraphValue> = [1.0, 2.0, 3.0].into_iter().map(GraphValue::new).collect();
    let frame = GraphFrame::new(40.0, 240.0);
    let layout = layout_graph(&series, &PlotGeometry::new(frame));

    assert!(layout.is_empty());
    assert!(layout.paths.is_empty());
    assert_eq!(layout.step_info, StepInfo::empty());
    assert_eq!(layout.frame, frame);
}

#[test]
fn narrowest_drawable_frame_keeps_points_inside() {
    let series: Vec<GraphValue> = [1.0, 2.0, 3.0].into_iter().map(GraphValue::new).collect();
    let layout = layout_graph(&series, &PlotGeometry::new(GraphFrame::new(52.0, 240.0)));

    let xs: Vec<f64> = layout.points.iter().map(|point| point.x).collect();
    assert_eq!(xs, vec![50.0, 51.0, 52.0]);
    assert_eq!(layout.paths.fill_outline.len(), series.len() + 4);
}

#[test]
fn singleton_keeps_gridlines_but_drops_paths() {
    let layout = layout_graph(&[GraphValue::new(5.0)], &geometry());

    assert_eq!(layout.points.len(), 1);
    assert!(!layout.grid_lines.is_empty());
    assert!(layout.paths.peak_line.is_empty());
    assert!(layout.paths.fill_outline.is_empty());
    assert!(layout.paths.dot_markers.is_empty());
}

#[test]
fn layout_is_idempotent() {
    let series = vec![
        GraphValue::with_label(58.0, "4.12"),
        GraphValue::with_label(54.6, "4.17"),
        GraphValue::new(53.7),
    ];
    let geometry = geometry();
    assert_eq!(layout_graph(&series, &geometry), layout_graph(&series, &geometry));
}

#[test]
fn layout_json_contract_round_trips() {
    let series = vec![GraphValue::with_label(3.0, "a"), GraphValue::new(7.5)];
    let layout = layout_graph(&series, &geometry());

    let json = layout.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    let parsed = GraphLayout::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, layout);

    let bare = serde_json::to_string(&layout).expect("serialize bare");
    let parsed = GraphLayout::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, layout);
}

#[test]
fn layout_json_contract_rejects_unknown_schema() {
    let layout = layout_graph(&[GraphValue::new(1.0)], &geometry());
    let json = layout
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 2");
    assert!(GraphLayout::from_json_compat_str(&json).is_err());
    assert!(GraphLayout::from_json_compat_str("not json").is_err());
}

#[test]
fn latest_values_keeps_newest_suffix() {
    let series: Vec<GraphValue> = (0..25).map(|i| GraphValue::new(f64::from(i))).collect();
    let kept = latest_values(&series, VALUE_MAX_COUNT);

    assert_eq!(kept.len(), 20);
    assert_eq!(kept[0].value, 5.0);
    assert_eq!(kept[19].value, 24.0);
    assert_eq!(latest_values(&series[..3], VALUE_MAX_COUNT).len(), 3);
}

#[test]
fn value_constructors_fill_labels() {
    let date = NaiveDate::from_ymd_opt(2024, 4, 12).expect("valid date");
    assert_eq!(GraphValue::dated(58.0, date).label.as_deref(), Some("4.12"));

    let value = GraphValue::from_decimal(Decimal::new(546, 1), Some("4.17".to_owned()))
        .expect("decimal fits f64");
    assert_abs_diff_eq!(value.value, 54.6, epsilon = 1e-12);
    assert_eq!(value.label.as_deref(), Some("4.17"));
}
