use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::core::{
    HitResult, MiniChartBox, MiniChartLayout, Record, SeriesKey, TimeScale, hit_test, project,
};
use crate::error::ChartResult;

/// Pointer sample in plot-local pixels over one series band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub series: SeriesKey,
}

impl PointerEvent {
    #[must_use]
    pub fn new(x: f64, y: f64, series: SeriesKey) -> Self {
        Self { x, y, series }
    }
}

/// Pixel offset from the pointer to the tooltip's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub dx: f64,
    pub dy: f64,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self { dx: 15.0, dy: -90.0 }
    }
}

/// Effect the host applies after each pointer event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TooltipEffect {
    Show {
        left: f64,
        top: f64,
        hit: HitResult,
        mini_chart: MiniChartLayout,
    },
    Hide,
}

impl TooltipEffect {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, TooltipEffect::Show { .. })
    }
}

/// Hover state threaded through pointer handlers.
///
/// A miss while hovering keeps the state `Hovering` with `hit: None`; only a
/// pointer-out returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering {
        series: SeriesKey,
        hit: Option<HitResult>,
    },
}

/// Inputs a pointer transition reads; borrowed from the current render pass.
#[derive(Debug, Clone, Copy)]
pub struct HoverContext<'a> {
    pub time_scale: TimeScale,
    pub records: &'a [Record],
    pub series_order: &'a [SeriesKey],
    pub tolerance: TimeDelta,
    pub mini_chart_box: MiniChartBox,
    pub tooltip_offset: TooltipOffset,
}

impl HoverState {
    #[must_use]
    pub fn is_hovering(self) -> bool {
        matches!(self, HoverState::Hovering { .. })
    }

    #[must_use]
    pub fn hit(self) -> Option<HitResult> {
        match self {
            HoverState::Hovering { hit, .. } => hit,
            HoverState::Idle => None,
        }
    }

    /// Resolves the pointer against the hovered series and moves to `Hovering`.
    pub fn on_pointer_move(
        self,
        event: PointerEvent,
        context: HoverContext<'_>,
    ) -> ChartResult<(HoverState, TooltipEffect)> {
        let hit = hit_test(
            event.x,
            event.series,
            context.time_scale,
            context.records,
            context.tolerance,
        );
        let next = HoverState::Hovering {
            series: event.series,
            hit,
        };

        let Some(hit) = hit else {
            return Ok((next, TooltipEffect::Hide));
        };
        let bars = project(&hit.record, context.series_order);
        let mini_chart = MiniChartLayout::new(&bars, context.mini_chart_box)?;
        Ok((
            next,
            TooltipEffect::Show {
                left: event.x + context.tooltip_offset.dx,
                top: event.y + context.tooltip_offset.dy,
                hit,
                mini_chart,
            },
        ))
    }

    #[must_use]
    pub fn on_pointer_out(self) -> (HoverState, TooltipEffect) {
        (HoverState::Idle, TooltipEffect::Hide)
    }
}
