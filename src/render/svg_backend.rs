use std::fmt::Write as _;

use tracing::trace;

use crate::core::curve::fmt_coord;
use crate::core::{Viewport, svg_path_data};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TooltipFrame};

/// Renderer producing a standalone SVG document.
///
/// Each `render` call discards the previous chart body. The tooltip is kept
/// as a single nested `<svg class="mini-bar-chart">` element that is removed
/// before every re-insertion.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    viewport: Option<Viewport>,
    origin: (f64, f64),
    body: String,
    tooltip: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_tooltip(&self) -> bool {
        self.tooltip.is_some()
    }

    /// Complete SVG document, or `None` before the first rendered frame.
    #[must_use]
    pub fn document(&self) -> Option<String> {
        let viewport = self.viewport?;
        let mut out = String::with_capacity(self.body.len() + 256);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart" width="{}" height="{}">"#,
            viewport.width, viewport.height
        );
        let _ = writeln!(
            out,
            r#"<g transform="translate({},{})">"#,
            fmt_coord(self.origin.0),
            fmt_coord(self.origin.1)
        );
        out.push_str(&self.body);
        if let Some(tooltip) = &self.tooltip {
            out.push_str(tooltip);
        }
        out.push_str("</g>\n</svg>\n");
        Some(out)
    }

    /// Writes the current document to `path`.
    pub fn write_to(&self, path: &std::path::Path) -> ChartResult<()> {
        let document = self.document().ok_or_else(|| {
            ChartError::InvalidData("nothing has been rendered yet".to_owned())
        })?;
        std::fs::write(path, document)?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.viewport = Some(frame.viewport);
        self.origin = frame.origin;
        self.body = frame_body(frame, "layer");
        self.tooltip = None;
        trace!(paths = frame.paths.len(), bytes = self.body.len(), "svg frame written");
        Ok(())
    }

    fn render_tooltip(&mut self, tooltip: Option<&TooltipFrame>) -> ChartResult<()> {
        self.tooltip = None;
        let Some(tooltip) = tooltip else {
            return Ok(());
        };
        tooltip.validate()?;

        let frame = &tooltip.frame;
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg class="mini-bar-chart" x="{}" y="{}" width="{}" height="{}" overflow="visible">"#,
            fmt_coord(tooltip.left),
            fmt_coord(tooltip.top),
            frame.viewport.width,
            frame.viewport.height
        );
        out.push_str(&frame_body(frame, "bar"));
        out.push_str("</svg>\n");
        self.tooltip = Some(out);
        Ok(())
    }
}

fn frame_body(frame: &RenderFrame, path_class: &str) -> String {
    let mut out = String::new();
    for path in &frame.paths {
        let _ = writeln!(
            out,
            r#"<path class="{path_class}" data-series="{}" d="{}" fill="{}"{}/>"#,
            escape_xml(&path.id),
            svg_path_data(&path.commands),
            path.fill.to_hex(),
            opacity_attr("fill-opacity", path.fill)
        );
    }
    for rect in &frame.rects {
        let _ = writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
            fmt_coord(rect.x),
            fmt_coord(rect.y),
            fmt_coord(rect.width),
            fmt_coord(rect.height),
            rect.fill.to_hex(),
            opacity_attr("fill-opacity", rect.fill)
        );
    }
    for line in &frame.lines {
        let _ = writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}/>"#,
            fmt_coord(line.x1),
            fmt_coord(line.y1),
            fmt_coord(line.x2),
            fmt_coord(line.y2),
            line.color.to_hex(),
            fmt_coord(line.stroke_width),
            opacity_attr("stroke-opacity", line.color)
        );
    }
    for text in &frame.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}"{}>{}</text>"#,
            fmt_coord(text.x),
            fmt_coord(text.y),
            fmt_coord(text.font_size_px),
            text.color.to_hex(),
            opacity_attr("fill-opacity", text.color),
            escape_xml(&text.text)
        );
    }
    out
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, fmt_coord(color.alpha))
    }
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
