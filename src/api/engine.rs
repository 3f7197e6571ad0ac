use tracing::debug;

use crate::error::ChartResult;
use crate::interaction::HoverState;
use crate::render::{RenderFrame, Renderer, TooltipFrame};

use super::render_frame_builder::build_chart_frame;
use super::{ChartLayout, StreamgraphConfig};

/// Main orchestration facade consumed by host applications.
///
/// `StreamgraphEngine` owns the record set, the derived layout, the hover
/// state and the renderer it draws to. The renderer is injected by the host,
/// so independent engines never share a drawing target.
pub struct StreamgraphEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: StreamgraphConfig,
    pub(super) records: Vec<crate::core::Record>,
    pub(super) layout: Option<ChartLayout>,
    pub(super) hover: HoverState,
    pub(super) tooltip: Option<TooltipFrame>,
}

impl<R: Renderer> StreamgraphEngine<R> {
    pub fn new(renderer: R, config: StreamgraphConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            records: Vec::new(),
            layout: None,
            hover: HoverState::Idle,
            tooltip: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &StreamgraphConfig {
        &self.config
    }

    /// Layout of the current record set, `None` while there is nothing to draw.
    #[must_use]
    pub fn layout(&self) -> Option<&ChartLayout> {
        self.layout.as_ref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Main scene for the current layout, `None` for an empty record set.
    pub fn build_render_frame(&self) -> ChartResult<Option<RenderFrame>> {
        self.layout
            .as_ref()
            .map(|layout| build_chart_frame(layout, &self.config))
            .transpose()
    }

    /// Redraws the whole chart; an empty record set draws nothing.
    pub fn render(&mut self) -> ChartResult<()> {
        let Some(frame) = self.build_render_frame()? else {
            debug!("skipping render: no records");
            return Ok(());
        };
        self.renderer.render(&frame)?;
        self.renderer.render_tooltip(self.tooltip.as_ref())
    }
}
