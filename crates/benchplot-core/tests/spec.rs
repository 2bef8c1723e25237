// File: crates/benchplot-core/tests/spec.rs
// Purpose: JSON chart descriptions: defaults, styling lookups and error mapping.

use benchplot_core::{ChartError, Figure, LegendPosition, LineChartSpec, Marker, ScaleKind, Theme};

const ARRAY_SUM: &str = r#"{
    "title": "Array Sum",
    "x_label": "Array size",
    "y_label": "Time (s)",
    "x_scale": "log",
    "y_scale": "log",
    "title_size": 14,
    "label_size": 12,
    "series": [
        { "label": "Serial", "x": [1000, 10000, 100000], "y": [0.0001, 0.001, 0.01],
          "marker": "o", "color": "blue", "line_width": 2 },
        { "label": "OpenMP", "x": [1000, 10000, 100000], "y": [0.0002, 0.0005, 0.004],
          "marker": "s", "color": "green", "line_width": 2 }
    ]
}"#;

#[test]
fn parses_log_log_description() {
    let spec = LineChartSpec::from_json_str(ARRAY_SUM).expect("parse");
    let axes = spec.axis_config().expect("axes");
    assert_eq!(axes.x.kind, ScaleKind::Log10);
    assert_eq!(axes.y.kind, ScaleKind::Log10);
    assert_eq!(axes.title_size, 14.0);
    assert_eq!(axes.label_size, 12.0);
    assert!(axes.grid);

    let series = spec.series().expect("series");
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].marker(), Marker::Circle);
    assert_eq!(series[1].marker(), Marker::Square);
    assert_eq!(series[0].color(), skia_safe::Color::from_rgb(0, 0, 255));
    assert_eq!(series[1].color(), skia_safe::Color::from_rgb(0, 128, 0));
    assert_eq!(series[0].line_width(), 2.0);

    let chart = spec.to_chart().expect("chart");
    assert_eq!(chart.legend(), Some(LegendPosition::UpperLeft));
    chart.validate().expect("valid chart");
}

#[test]
fn defaults_apply_when_fields_are_missing() {
    let spec = LineChartSpec::from_json_str(r#"{ "title": "t", "series": [] }"#).expect("parse");
    let axes = spec.axis_config().expect("axes");
    assert_eq!(axes.x.kind, ScaleKind::Linear);
    assert!(axes.x.label.is_empty());
    let opts = spec.render_options().expect("options");
    assert_eq!((opts.width, opts.height), (1000, 600));
    assert_eq!(opts.theme, Theme::light());

    // no series is still a shape error at validation time
    let chart = spec.to_chart().expect("chart");
    assert!(matches!(chart.validate(), Err(ChartError::Shape { .. })));
}

#[test]
fn legend_can_be_moved_or_hidden() {
    let moved = LineChartSpec::from_json_str(r#"{ "title": "t", "legend": "lower right", "series": [] }"#).unwrap();
    assert_eq!(moved.legend().unwrap(), Some(LegendPosition::LowerRight));

    let hidden = LineChartSpec::from_json_str(r#"{ "title": "t", "legend": "none", "series": [] }"#).unwrap();
    assert_eq!(hidden.legend().unwrap(), None);

    let bad = LineChartSpec::from_json_str(r#"{ "title": "t", "legend": "middle", "series": [] }"#).unwrap();
    assert!(matches!(bad.legend(), Err(ChartError::Spec(_))));
}

#[test]
fn unknown_names_are_spec_errors() {
    let scale = LineChartSpec::from_json_str(r#"{ "title": "t", "x_scale": "symlog", "series": [] }"#).unwrap();
    assert!(matches!(scale.axis_config(), Err(ChartError::Spec(_))));

    let theme = LineChartSpec::from_json_str(r#"{ "title": "t", "theme": "solarized", "series": [] }"#).unwrap();
    assert!(matches!(theme.render_options(), Err(ChartError::Spec(_))));

    let colour = r#"{ "title": "t", "series": [ { "label": "s", "x": [1], "y": [1], "color": "chartreuse" } ] }"#;
    let spec = LineChartSpec::from_json_str(colour).unwrap();
    match spec.series() {
        Err(ChartError::Spec(msg)) => assert!(msg.contains("chartreuse"), "{msg}"),
        other => panic!("expected spec error, got {other:?}"),
    }

    let marker = r#"{ "title": "t", "series": [ { "label": "s", "x": [1], "y": [1], "marker": "*" } ] }"#;
    assert!(matches!(LineChartSpec::from_json_str(marker).unwrap().series(), Err(ChartError::Spec(_))));
}

#[test]
fn malformed_json_and_unknown_fields_are_rejected() {
    assert!(matches!(LineChartSpec::from_json_str("{ not json"), Err(ChartError::SpecJson(_))));
    let extra = r#"{ "title": "t", "series": [], "colour_map": "viridis" }"#;
    assert!(matches!(LineChartSpec::from_json_str(extra), Err(ChartError::SpecJson(_))));
}

#[test]
fn mismatched_series_lengths_are_shape_errors() {
    let json = r#"{ "title": "t", "series": [ { "label": "s", "x": [1, 2, 3], "y": [1, 2] } ] }"#;
    let spec = LineChartSpec::from_json_str(json).unwrap();
    assert!(matches!(spec.to_chart(), Err(ChartError::Shape { .. })));
}

#[test]
fn canvas_size_must_be_positive() {
    let spec = LineChartSpec::from_json_str(r#"{ "title": "t", "width": 0, "series": [] }"#).unwrap();
    assert!(matches!(spec.render_options(), Err(ChartError::Spec(_))));
}

#[test]
fn missing_spec_file_is_an_io_error() {
    assert!(matches!(
        LineChartSpec::from_path("target/test_out/no_such_spec.json"),
        Err(ChartError::Io { .. })
    ));
}

#[test]
fn grid_can_be_switched_off() {
    let spec = LineChartSpec::from_json_str(r#"{ "title": "t", "grid": false, "series": [] }"#).unwrap();
    assert!(!spec.axis_config().unwrap().grid);
}
