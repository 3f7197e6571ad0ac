use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, TooltipFrame};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_path_count: usize,
    pub last_text_count: usize,
    pub tooltip_visible: bool,
    pub tooltip_bar_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_path_count = frame.paths.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }

    fn render_tooltip(&mut self, tooltip: Option<&TooltipFrame>) -> ChartResult<()> {
        match tooltip {
            Some(tooltip) => {
                tooltip.validate()?;
                self.tooltip_visible = true;
                self.tooltip_bar_count = tooltip.frame.rects.len();
            }
            None => {
                self.tooltip_visible = false;
                self.tooltip_bar_count = 0;
            }
        }
        Ok(())
    }
}
