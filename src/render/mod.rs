mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{RenderFrame, TooltipFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, PathPrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use svg_backend::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive fully materialized, deterministic frames so drawing code
/// stays isolated from layout and interaction logic. The engine owns its
/// renderer, so several charts can draw to independent targets.
pub trait Renderer {
    /// Replaces everything previously drawn with `frame`.
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Replaces the tooltip; `None` removes it.
    fn render_tooltip(&mut self, tooltip: Option<&TooltipFrame>) -> ChartResult<()> {
        let _ = tooltip;
        Ok(())
    }
}
