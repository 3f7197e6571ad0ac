use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitive coordinates are relative to `origin`, which is the top-left of
/// the plot area inside the viewport. Paths are listed in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub origin: (f64, f64),
    pub paths: Vec<PathPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            origin: (0.0, 0.0),
            paths: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.origin.0.is_finite() || !self.origin.1.is_finite() {
            return Err(ChartError::InvalidData(
                "frame origin must be finite".to_owned(),
            ));
        }

        for path in &self.paths {
            path.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// Tooltip scene placed at `(left, top)` in plot-local pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipFrame {
    pub left: f64,
    pub top: f64,
    pub frame: RenderFrame,
}

impl TooltipFrame {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.left.is_finite() || !self.top.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip position must be finite".to_owned(),
            ));
        }
        self.frame.validate()
    }
}
