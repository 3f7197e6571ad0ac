mod support;

use streamgraph::api::{StreamgraphConfig, StreamgraphEngine};
use streamgraph::core::SeriesKey;
use streamgraph::interaction::PointerEvent;
use streamgraph::render::{Color, SvgRenderer};
use support::{rotating_three_months, utc};

fn rendered_engine() -> StreamgraphEngine<SvgRenderer> {
    let mut engine = StreamgraphEngine::new(SvgRenderer::new(), StreamgraphConfig::default())
        .expect("engine init");
    engine.set_records(rotating_three_months()).expect("set");
    engine.render().expect("render");
    engine
}

#[test]
fn nothing_rendered_has_no_document() {
    let renderer = SvgRenderer::new();
    assert!(renderer.document().is_none());
}

#[test]
fn document_contains_layers_axis_and_legend() {
    let engine = rendered_engine();
    let document = engine.renderer().document().expect("document");

    assert!(document.starts_with("<svg"));
    assert!(document.contains(r#"width="800" height="400""#));
    assert!(document.contains(r#"<g transform="translate(50,20)">"#));
    assert_eq!(document.matches(r#"<path class="layer""#).count(), 5);
    assert!(document.contains(r##"fill="#e41a1c""##));
    assert!(document.contains(">Feb</text>"));
    assert!(document.contains(">LLaMA-3.1</text>"));
    assert!(document.contains(r#"stroke-opacity="0""#));
    assert!(document.trim_end().ends_with("</svg>"));
}

#[test]
fn tooltip_is_replaced_not_accumulated() {
    let mut engine = rendered_engine();
    let time_scale = engine.layout().expect("layout").time_scale;
    let jan = time_scale.scale(utc(2024, 1, 31));
    let feb = time_scale.scale(utc(2024, 2, 15));

    engine
        .pointer_move(PointerEvent::new(jan, 100.0, SeriesKey::Gpt4))
        .expect("pointer");
    engine
        .pointer_move(PointerEvent::new(feb, 100.0, SeriesKey::Gemini))
        .expect("pointer");

    let document = engine.renderer().document().expect("document");
    assert_eq!(document.matches("mini-bar-chart").count(), 1);
    assert_eq!(document.matches("<rect").count(), 10);

    engine.pointer_out().expect("out");
    let document = engine.renderer().document().expect("document");
    assert_eq!(document.matches("mini-bar-chart").count(), 0);
    assert!(!engine.renderer().has_tooltip());
}

#[test]
fn rerender_keeps_open_tooltip() {
    let mut engine = rendered_engine();
    engine
        .pointer_move(PointerEvent::new(0.0, 100.0, SeriesKey::Gpt4))
        .expect("pointer");
    engine.render().expect("render");
    assert!(engine.renderer().has_tooltip());
}

#[test]
fn hex_colors_round_trip() {
    let color = Color::from_hex("#377eb8").expect("hex");
    assert_eq!(color.to_hex(), "#377eb8");
    assert!(Color::from_hex("377eb8").is_ok());
    assert!(Color::from_hex("#37eb8").is_err());
    assert!(Color::from_hex("#zzzzzz").is_err());
}

#[test]
fn writes_document_to_disk() {
    let engine = rendered_engine();
    let path = std::env::temp_dir().join(format!(
        "streamgraph-svg-test-{}.svg",
        std::process::id()
    ));
    engine.renderer().write_to(&path).expect("write");
    let written = std::fs::read_to_string(&path).expect("read back");
    let _ = std::fs::remove_file(&path);
    assert_eq!(Some(written), engine.renderer().document());
}
