mod support;

use streamgraph::core::{
    PathCommand, SeriesKey, TimeScale, ValueScale, build_area_path, build_layer_geometries, stack,
};
use support::{record, rotating_three_months};

fn scales(records: &[streamgraph::core::Record]) -> (TimeScale, ValueScale) {
    let layers = stack(records, &SeriesKey::ALL).expect("stack");
    (
        TimeScale::from_records(records, 600.0).expect("time scale"),
        ValueScale::from_layers(&layers, 330.0).expect("value scale"),
    )
}

#[test]
fn area_projection_returns_empty_for_empty_series() {
    let time_scale =
        TimeScale::new(support::utc(2024, 1, 1), support::utc(2024, 2, 1), 600.0).expect("time");
    let value_scale = ValueScale::new(0.0, 10.0, 330.0).expect("value");

    let area = build_area_path(&[], time_scale, value_scale).expect("build");
    assert!(area.vertices.is_empty());
    assert!(area.path.is_empty());
}

#[test]
fn three_samples_produce_closed_basis_outline() {
    let records = rotating_three_months();
    let (time_scale, value_scale) = scales(&records);
    let layers = stack(&records, &SeriesKey::ALL).expect("stack");

    let area = build_area_path(&layers[&SeriesKey::Gemini], time_scale, value_scale)
        .expect("build");
    assert_eq!(area.vertices.len(), 3);

    // Top: M L C C L, bottom: L L C C L, then Z.
    assert_eq!(area.path.len(), 11);
    let first = area.vertices[0];
    assert_eq!(
        area.path[0],
        PathCommand::MoveTo {
            x: first.x,
            y: first.y_high
        }
    );
    assert_eq!(
        area.path[9],
        PathCommand::LineTo {
            x: first.x,
            y: first.y_low
        }
    );
    assert_eq!(area.path[10], PathCommand::Close);
    assert!(matches!(area.path[2], PathCommand::CubicTo { .. }));
}

#[test]
fn basis_curve_passes_through_end_points_only() {
    let records = rotating_three_months();
    let (time_scale, value_scale) = scales(&records);
    let layers = stack(&records, &SeriesKey::ALL).expect("stack");
    let area = build_area_path(&layers[&SeriesKey::Gemini], time_scale, value_scale)
        .expect("build");

    let middle = area.vertices[1];
    let PathCommand::CubicTo { y, .. } = area.path[2] else {
        panic!("expected cubic segment");
    };
    // The spline approximates the interior control point instead of hitting it.
    assert!((y - middle.y_high).abs() > 1e-6);

    let last = area.vertices[2];
    assert_eq!(
        area.path[4],
        PathCommand::LineTo {
            x: last.x,
            y: last.y_high
        }
    );
}

#[test]
fn two_samples_produce_straight_outline() {
    let records = vec![
        record(2024, 1, 31, [4.0, 0.0, 0.0, 0.0, 0.0]),
        record(2024, 2, 29, [6.0, 0.0, 0.0, 0.0, 0.0]),
    ];
    let (time_scale, value_scale) = scales(&records);
    let layers = stack(&records, &SeriesKey::ALL).expect("stack");

    let area =
        build_area_path(&layers[&SeriesKey::Gpt4], time_scale, value_scale).expect("build");
    assert_eq!(area.path.len(), 5);
    assert!(
        area.path
            .iter()
            .all(|command| !matches!(command, PathCommand::CubicTo { .. }))
    );
}

#[test]
fn single_sample_produces_vertical_segment() {
    let records = vec![record(2024, 1, 31, [4.0, 2.0, 0.0, 0.0, 0.0])];
    let (time_scale, value_scale) = scales(&records);
    let layers = stack(&records, &SeriesKey::ALL).expect("stack");

    let area =
        build_area_path(&layers[&SeriesKey::Gpt4], time_scale, value_scale).expect("build");
    assert_eq!(area.path.len(), 3);
    assert!(matches!(area.path[0], PathCommand::MoveTo { .. }));
    assert!(matches!(area.path[1], PathCommand::LineTo { .. }));
    assert_eq!(area.path[2], PathCommand::Close);
}

#[test]
fn svg_path_data_is_compact_and_closed() {
    let records = rotating_three_months();
    let (time_scale, value_scale) = scales(&records);
    let layers = stack(&records, &SeriesKey::ALL).expect("stack");
    let area =
        build_area_path(&layers[&SeriesKey::Gpt4], time_scale, value_scale).expect("build");

    let data = area.svg_path_data();
    assert!(data.starts_with("M0,"));
    assert!(data.ends_with('Z'));
    assert_eq!(data.matches('C').count(), 4);
}

#[test]
fn geometries_follow_layer_order() {
    let records = rotating_three_months();
    let (time_scale, value_scale) = scales(&records);
    let order = [SeriesKey::Claude, SeriesKey::Gpt4];
    let layers = stack(&records, &order).expect("stack");

    let geometries = build_layer_geometries(&layers, time_scale, value_scale).expect("build");
    let keys: Vec<SeriesKey> = geometries.iter().map(|geometry| geometry.key).collect();
    assert_eq!(keys, order.to_vec());
}
