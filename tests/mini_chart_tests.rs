mod support;

use streamgraph::core::{MiniChartBox, MiniChartLayout, SeriesKey, project};
use support::record;

#[test]
fn projection_follows_series_order() {
    let sample = record(2024, 1, 31, [1.0, 2.0, 3.0, 4.0, 5.0]);
    let order = [SeriesKey::Claude, SeriesKey::Gpt4];

    let bars = project(&sample, &order);
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].key, SeriesKey::Claude);
    assert_eq!(bars[0].value, 4.0);
    assert_eq!(bars[1].key, SeriesKey::Gpt4);
    assert_eq!(bars[1].value, 1.0);
}

#[test]
fn tallest_bar_fills_plot_height() {
    let sample = record(2024, 1, 31, [10.0, 5.0, 0.0, 2.5, 7.5]);
    let bars = project(&sample, &SeriesKey::ALL);
    let layout = MiniChartLayout::new(&bars, MiniChartBox::default()).expect("layout");

    assert_eq!(layout.bars.len(), 5);
    let tallest = layout.bars[0];
    assert!((tallest.y - 0.0).abs() <= 1e-9);
    assert!((tallest.height - 70.0).abs() <= 1e-9);

    let half = layout.bars[1];
    assert!((half.height - 35.0).abs() <= 1e-9);

    let empty = layout.bars[2];
    assert!((empty.height - 0.0).abs() <= 1e-9);
    assert!((empty.y - 70.0).abs() <= 1e-9);
}

#[test]
fn bars_are_evenly_spaced_inside_box() {
    let sample = record(2024, 1, 31, [1.0; 5]);
    let bars = project(&sample, &SeriesKey::ALL);
    let layout = MiniChartLayout::new(&bars, MiniChartBox::default()).expect("layout");

    let step = layout.x_scale.step();
    for pair in layout.bars.windows(2) {
        assert!((pair[1].x - pair[0].x - step).abs() <= 1e-9);
    }
    let last = layout.bars[4];
    assert!(layout.bars[0].x > 0.0);
    assert!(last.x + last.width < 120.0);
}

#[test]
fn value_ticks_are_round_numbers() {
    let sample = record(2024, 1, 31, [10.0, 0.0, 0.0, 0.0, 0.0]);
    let bars = project(&sample, &SeriesKey::ALL);
    let layout = MiniChartLayout::new(&bars, MiniChartBox::default()).expect("layout");

    let values: Vec<f64> = layout.y_ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![0.0, 5.0, 10.0]);
    assert!((layout.y_ticks[0].y - 70.0).abs() <= 1e-9);
    assert!((layout.y_ticks[2].y - 0.0).abs() <= 1e-9);
}

#[test]
fn all_zero_record_draws_flat_bars() {
    let sample = record(2024, 1, 31, [0.0; 5]);
    let bars = project(&sample, &SeriesKey::ALL);
    let layout = MiniChartLayout::new(&bars, MiniChartBox::default()).expect("layout");

    assert!(layout.bars.iter().all(|bar| bar.height.abs() <= 1e-9));
    assert_eq!(layout.y_scale.domain(), (0.0, 1.0));
}

#[test]
fn invalid_box_is_rejected() {
    let sample = record(2024, 1, 31, [1.0; 5]);
    let bars = project(&sample, &SeriesKey::ALL);
    let chart_box = MiniChartBox {
        plot_height: 90.0,
        ..MiniChartBox::default()
    };
    assert!(MiniChartLayout::new(&bars, chart_box).is_err());
}

#[test]
fn oversized_tick_count_is_rejected() {
    let sample = record(2024, 1, 31, [1.0; 5]);
    let bars = project(&sample, &SeriesKey::ALL);
    let chart_box = MiniChartBox {
        y_tick_count: 10_000_000,
        ..MiniChartBox::default()
    };
    assert!(MiniChartLayout::new(&bars, chart_box).is_err());
}
