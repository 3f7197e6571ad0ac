use tracing::trace;

use crate::core::{HitResult, SeriesKey, hit_test};
use crate::error::ChartResult;
use crate::interaction::{HoverContext, HoverState, PointerEvent, TooltipEffect};
use crate::render::{Renderer, TooltipFrame};

use super::StreamgraphEngine;
use super::render_frame_builder::build_tooltip_frame;

impl<R: Renderer> StreamgraphEngine<R> {
    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipFrame> {
        self.tooltip.as_ref()
    }

    /// Series band under a plot-local point, for hosts without their own
    /// shape hit-testing.
    #[must_use]
    pub fn layer_at(&self, x: f64, y: f64) -> Option<SeriesKey> {
        self.layout.as_ref()?.layer_at(x, y)
    }

    /// Nearest record for `series` under plot-local `pointer_x`, without
    /// touching hover state.
    #[must_use]
    pub fn hit_test(&self, pointer_x: f64, series: SeriesKey) -> Option<HitResult> {
        let layout = self.layout.as_ref()?;
        hit_test(
            pointer_x,
            series,
            layout.time_scale,
            &self.records,
            self.config.hit_tolerance(),
        )
    }

    /// Handles a pointer move over a series band.
    ///
    /// The tooltip is replaced on a hit and removed on a miss; the renderer
    /// is told either way.
    pub fn pointer_move(&mut self, event: PointerEvent) -> ChartResult<TooltipEffect> {
        let Some(layout) = self.layout.as_ref() else {
            return Ok(TooltipEffect::Hide);
        };

        let context = HoverContext {
            time_scale: layout.time_scale,
            records: &self.records,
            series_order: &self.config.series_order,
            tolerance: self.config.hit_tolerance(),
            mini_chart_box: self.config.mini_chart,
            tooltip_offset: self.config.tooltip_offset,
        };
        let (next, effect) = self.hover.on_pointer_move(event, context)?;

        self.tooltip = match &effect {
            TooltipEffect::Show {
                left,
                top,
                mini_chart,
                hit,
            } => {
                trace!(
                    series = %hit.series,
                    record_index = hit.record_index,
                    "pointer hit"
                );
                Some(build_tooltip_frame(*left, *top, mini_chart, &self.config)?)
            }
            TooltipEffect::Hide => None,
        };
        self.hover = next;
        self.renderer.render_tooltip(self.tooltip.as_ref())?;
        Ok(effect)
    }

    /// Handles the pointer leaving every band.
    pub fn pointer_out(&mut self) -> ChartResult<TooltipEffect> {
        let (next, effect) = self.hover.on_pointer_out();
        self.hover = next;
        self.tooltip = None;
        self.renderer.render_tooltip(None)?;
        Ok(effect)
    }
}
