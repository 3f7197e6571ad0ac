use crate::core::{MiniChartLayout, SeriesKey};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
    TooltipFrame,
};

use super::{ChartLayout, StreamgraphConfig};

const AXIS_TICK_SIZE_PX: f64 = 6.0;
const AXIS_LABEL_GAP_PX: f64 = 3.0;
const AXIS_STROKE_PX: f64 = 1.0;
const LEGEND_OFFSET_X_PX: f64 = 20.0;
const LEGEND_OFFSET_Y_PX: f64 = 10.0;
const LEGEND_ROW_PX: f64 = 20.0;
const LEGEND_SWATCH_PX: f64 = 15.0;
const LEGEND_LABEL_X_PX: f64 = 20.0;
const LEGEND_LABEL_Y_PX: f64 = 12.0;
const TOOLTIP_FONT_PX: f64 = 10.0;

/// Builds the main chart scene: layers, time axis, suppressed value axis and legend.
pub(super) fn build_chart_frame(
    layout: &ChartLayout,
    config: &StreamgraphConfig,
) -> ChartResult<RenderFrame> {
    let width = f64::from(layout.plot_area.width);
    let height = f64::from(layout.plot_area.height);
    let mut frame = RenderFrame::new(config.viewport).with_origin(
        f64::from(config.margins.left),
        f64::from(config.margins.top),
    );

    for geometry in &layout.geometries {
        frame.paths.push(PathPrimitive::new(
            geometry.key.as_str(),
            geometry.area.path.clone(),
            config.color_for(geometry.key)?,
        ));
    }

    // Time axis along the plot bottom.
    frame
        .lines
        .push(LinePrimitive::new(0.0, height, width, height, AXIS_STROKE_PX, Color::BLACK));
    let label_y = height + AXIS_TICK_SIZE_PX + AXIS_LABEL_GAP_PX + config.axis_font_size_px;
    for tick in layout.time_scale.month_ticks() {
        frame.lines.push(LinePrimitive::new(
            tick.x,
            height,
            tick.x,
            height + AXIS_TICK_SIZE_PX,
            AXIS_STROKE_PX,
            Color::BLACK,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.label,
            tick.x,
            label_y,
            config.axis_font_size_px,
            Color::BLACK,
            TextHAlign::Center,
        ));
    }

    // The value axis is kept in the scene but never visible.
    frame.lines.push(LinePrimitive::new(
        0.0,
        0.0,
        0.0,
        height,
        AXIS_STROKE_PX,
        Color::TRANSPARENT,
    ));

    if config.show_legend {
        push_legend(&mut frame, &config.series_order, width, config)?;
    }

    Ok(frame)
}

fn push_legend(
    frame: &mut RenderFrame,
    series_order: &[SeriesKey],
    plot_width: f64,
    config: &StreamgraphConfig,
) -> ChartResult<()> {
    let x = plot_width + LEGEND_OFFSET_X_PX;
    for (row, key) in series_order.iter().enumerate() {
        let y = LEGEND_OFFSET_Y_PX + row as f64 * LEGEND_ROW_PX;
        frame.rects.push(RectPrimitive::new(
            x,
            y,
            LEGEND_SWATCH_PX,
            LEGEND_SWATCH_PX,
            config.color_for(*key)?,
        ));
        frame.texts.push(TextPrimitive::new(
            key.as_str(),
            x + LEGEND_LABEL_X_PX,
            y + LEGEND_LABEL_Y_PX,
            config.axis_font_size_px,
            Color::BLACK,
            TextHAlign::Left,
        ));
    }
    Ok(())
}

/// Builds the tooltip scene for a laid-out mini chart.
pub(super) fn build_tooltip_frame(
    left: f64,
    top: f64,
    mini_chart: &MiniChartLayout,
    config: &StreamgraphConfig,
) -> ChartResult<TooltipFrame> {
    let chart_box = mini_chart.chart_box;
    let viewport = crate::core::Viewport::new(
        chart_box.width.ceil() as u32,
        chart_box.height.ceil() as u32,
    );
    let mut frame = RenderFrame::new(viewport);

    for bar in &mini_chart.bars {
        frame.rects.push(RectPrimitive::new(
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            config.color_for(bar.key)?,
        ));
    }

    // Category axis without tick marks.
    let axis_y = chart_box.plot_height;
    frame.lines.push(LinePrimitive::new(
        0.0,
        axis_y,
        chart_box.width,
        axis_y,
        AXIS_STROKE_PX,
        Color::BLACK,
    ));
    for bar in &mini_chart.bars {
        frame.texts.push(TextPrimitive::new(
            bar.key.as_str(),
            bar.x + bar.width / 2.0,
            axis_y + AXIS_LABEL_GAP_PX + TOOLTIP_FONT_PX * 0.71,
            TOOLTIP_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        ));
    }

    // Value axis with a handful of round ticks.
    frame
        .lines
        .push(LinePrimitive::new(0.0, 0.0, 0.0, axis_y, AXIS_STROKE_PX, Color::BLACK));
    for tick in &mini_chart.y_ticks {
        frame.texts.push(TextPrimitive::new(
            format_tick(tick.value),
            -AXIS_LABEL_GAP_PX,
            tick.y + TOOLTIP_FONT_PX * 0.32,
            TOOLTIP_FONT_PX,
            Color::BLACK,
            TextHAlign::Right,
        ));
    }

    Ok(TooltipFrame { left, top, frame })
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.6}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::format_tick;

    #[test]
    fn tick_labels_drop_trailing_zeros() {
        assert_eq!(format_tick(50.0), "50");
        assert_eq!(format_tick(0.5), "0.5");
        assert_eq!(format_tick(0.25), "0.25");
    }
}
