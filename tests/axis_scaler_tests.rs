use line_graph::core::{MAX_STEP_COUNT, MIN_STEP_COUNT, StepInfo, scale_steps};

const PLOT_HEIGHT: f64 = 200.0;

#[test]
fn empty_series_yields_degenerate_step_info() {
    let info = scale_steps(&[], PLOT_HEIGHT);
    assert_eq!(info, StepInfo::empty());
    assert!(info.is_empty());
}

#[test]
fn non_finite_only_series_is_treated_as_empty() {
    let info = scale_steps(&[f64::NAN, f64::INFINITY], PLOT_HEIGHT);
    assert!(info.is_empty());
}

#[test]
fn weight_log_scales_to_ten_unit_steps() {
    let values = [58.0, 54.6, 53.7, 52.5, 53.8, 57.0, 60.0];
    let info = scale_steps(&values, PLOT_HEIGHT);

    assert_eq!(info.lower_bound, 52.0);
    assert_eq!(info.step_count, 10);
    assert_eq!(info.step_value, 1.0);
    assert_eq!(info.upper_bound, 62.0);
    assert_eq!(info.step_height_px, 20.0);
    assert_eq!(
        info.upper_bound,
        info.lower_bound + info.step_value * info.step_count as f64
    );
}

#[test]
fn singleton_still_gets_non_zero_step() {
    let info = scale_steps(&[5.0], PLOT_HEIGHT);

    assert_eq!(info.lower_bound, 4.0);
    assert_eq!(info.step_count, MIN_STEP_COUNT);
    assert_eq!(info.step_value, 1.0);
    assert_eq!(info.upper_bound, 9.0);
    assert_eq!(info.step_height_px, 40.0);
}

#[test]
fn huge_singleton_keeps_unit_step() {
    // At this magnitude the half-unit padding rounds away entirely.
    let info = scale_steps(&[1e17], PLOT_HEIGHT);

    assert_eq!(info.step_count, MIN_STEP_COUNT);
    assert_eq!(info.step_value, 1.0);
    assert!(info.lower_bound <= 1e17);
    assert!(info.upper_bound >= 1e17);
}

#[test]
fn flat_series_matches_singleton_layout() {
    let flat = scale_steps(&[10.0, 10.0, 10.0], PLOT_HEIGHT);
    let single = scale_steps(&[10.0], PLOT_HEIGHT);
    assert_eq!(flat, single);
    assert_eq!(flat.lower_bound, 9.0);
    assert_eq!(flat.upper_bound, 14.0);
}

#[test]
fn wide_range_clamps_to_max_step_count_and_still_covers_max() {
    let info = scale_steps(&[0.0, 100.0], PLOT_HEIGHT);

    assert_eq!(info.lower_bound, -1.0);
    assert_eq!(info.step_count, MAX_STEP_COUNT);
    // 102 / 10 rounds to 10, which would stop at 99; the step is raised to 11.
    assert_eq!(info.step_value, 11.0);
    assert_eq!(info.upper_bound, 109.0);
}

#[test]
fn negative_values_use_floor_for_padding() {
    let info = scale_steps(&[-3.2, -1.0], PLOT_HEIGHT);

    assert_eq!(info.lower_bound, -4.0);
    assert_eq!(info.step_count, 5);
    assert_eq!(info.step_value, 1.0);
    assert_eq!(info.upper_bound, 1.0);
}

#[test]
fn zero_plot_height_short_circuits_to_zero_step_height() {
    let info = scale_steps(&[1.0, 2.0, 3.0], 0.0);

    assert_eq!(info.step_height_px, 0.0);
    assert_eq!(info.lower_bound, 0.0);
    assert_eq!(info.step_count, 5);
    assert_eq!(info.step_value, 1.0);
    assert_eq!(info.upper_bound, 5.0);
}

#[test]
fn negative_or_nan_plot_height_behaves_like_zero() {
    let values = [1.0, 2.0, 3.0];
    let zero = scale_steps(&values, 0.0);
    assert_eq!(scale_steps(&values, -50.0), zero);
    assert_eq!(scale_steps(&values, f64::NAN), zero);
}

#[test]
fn non_finite_values_do_not_widen_bounds() {
    let clean = scale_steps(&[3.0, 7.0], PLOT_HEIGHT);
    let noisy = scale_steps(&[3.0, f64::NAN, 7.0, f64::NEG_INFINITY], PLOT_HEIGHT);
    assert_eq!(clean, noisy);
}

#[test]
fn value_bounds_do_not_depend_on_plot_height() {
    let values = [12.0, 18.5, 15.0, 21.0];
    let short = scale_steps(&values, 120.0);
    let tall = scale_steps(&values, 900.0);

    assert_eq!(short.lower_bound, tall.lower_bound);
    assert_eq!(short.upper_bound, tall.upper_bound);
    assert_eq!(short.step_count, tall.step_count);
    assert!(short.step_height_px < tall.step_height_px);
}
