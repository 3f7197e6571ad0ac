mod support;

use streamgraph::core::{MiniChartBox, SeriesKey, TimeScale, default_hit_tolerance};
use streamgraph::interaction::{
    HoverContext, HoverState, PointerEvent, TooltipEffect, TooltipOffset,
};
use support::{rotating_three_months, utc};

fn context<'a>(
    records: &'a [streamgraph::core::Record],
    time_scale: TimeScale,
) -> HoverContext<'a> {
    HoverContext {
        time_scale,
        records,
        series_order: &SeriesKey::ALL,
        tolerance: default_hit_tolerance(),
        mini_chart_box: MiniChartBox::default(),
        tooltip_offset: TooltipOffset::default(),
    }
}

#[test]
fn default_state_is_idle() {
    let state = HoverState::default();
    assert_eq!(state, HoverState::Idle);
    assert!(!state.is_hovering());
    assert!(state.hit().is_none());
}

#[test]
fn hit_moves_to_hovering_and_shows_tooltip() {
    let records = rotating_three_months();
    let time_scale = TimeScale::from_records(&records, 600.0).expect("scale");
    let x = time_scale.scale(utc(2024, 2, 15));

    let (state, effect) = HoverState::Idle
        .on_pointer_move(
            PointerEvent::new(x, 120.0, SeriesKey::Gemini),
            context(&records, time_scale),
        )
        .expect("transition");

    let hit = state.hit().expect("hit stored in state");
    assert_eq!(hit.record_index, 1);
    match effect {
        TooltipEffect::Show {
            left,
            top,
            mini_chart,
            ..
        } => {
            assert!((left - (x + 15.0)).abs() <= 1e-9);
            assert!((top - 30.0).abs() <= 1e-9);
            assert_eq!(mini_chart.bars.len(), 5);
            assert_eq!(mini_chart.bars[1].value, 10.0);
        }
        TooltipEffect::Hide => panic!("expected tooltip"),
    }
}

#[test]
fn miss_while_hovering_hides_tooltip_but_keeps_hovering() {
    let records = rotating_three_months();
    let time_scale = TimeScale::from_records(&records, 600.0).expect("scale");
    let hovering = HoverState::Hovering {
        series: SeriesKey::Gpt4,
        hit: None,
    };
    let x = time_scale.scale(utc(2024, 5, 15));

    let (state, effect) = hovering
        .on_pointer_move(
            PointerEvent::new(x, 10.0, SeriesKey::Palm2),
            context(&records, time_scale),
        )
        .expect("transition");

    assert_eq!(effect, TooltipEffect::Hide);
    assert_eq!(
        state,
        HoverState::Hovering {
            series: SeriesKey::Palm2,
            hit: None
        }
    );
}

#[test]
fn pointer_out_returns_to_idle() {
    let state = HoverState::Hovering {
        series: SeriesKey::Claude,
        hit: None,
    };
    let (next, effect) = state.on_pointer_out();
    assert_eq!(next, HoverState::Idle);
    assert!(!effect.is_visible());
}

#[test]
fn custom_offset_moves_tooltip() {
    let records = rotating_three_months();
    let time_scale = TimeScale::from_records(&records, 600.0).expect("scale");
    let mut ctx = context(&records, time_scale);
    ctx.tooltip_offset = TooltipOffset { dx: -5.0, dy: 5.0 };

    let (_, effect) = HoverState::Idle
        .on_pointer_move(PointerEvent::new(0.0, 0.0, SeriesKey::Gpt4), ctx)
        .expect("transition");
    let TooltipEffect::Show { left, top, .. } = effect else {
        panic!("expected tooltip");
    };
    assert_eq!((left, top), (-5.0, 5.0));
}
