use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BandScale, LinearScale, Record, SeriesKey};
use crate::error::{ChartError, ChartResult};

/// One bar of the tooltip chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiniBar {
    pub key: SeriesKey,
    pub value: f64,
}

/// Upper bound for `MiniChartBox::y_tick_count`.
pub const MAX_MINI_Y_TICKS: usize = 32;

/// Pixel box the tooltip chart is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiniChartBox {
    pub width: f64,
    pub height: f64,
    /// Height of the bar area; the remainder below holds the category axis.
    pub plot_height: f64,
    pub padding: f64,
    pub y_tick_count: usize,
}

impl Default for MiniChartBox {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 80.0,
            plot_height: 70.0,
            padding: 0.2,
            y_tick_count: 3,
        }
    }
}

impl MiniChartBox {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || !self.plot_height.is_finite()
            || self.width <= 0.0
            || self.plot_height <= 0.0
            || self.plot_height > self.height
        {
            return Err(ChartError::InvalidData(
                "mini chart box must be finite with 0 < plot_height <= height".to_owned(),
            ));
        }
        if !self.padding.is_finite() || !(0.0..=1.0).contains(&self.padding) {
            return Err(ChartError::InvalidData(
                "mini chart padding must be in [0, 1]".to_owned(),
            ));
        }
        if self.y_tick_count > MAX_MINI_Y_TICKS {
            return Err(ChartError::InvalidData(format!(
                "mini chart y_tick_count must be <= {MAX_MINI_Y_TICKS}"
            )));
        }
        Ok(self)
    }
}

/// Bar rectangle in tooltip-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiniBarRect {
    pub key: SeriesKey,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Value tick on the tooltip's left axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiniTick {
    pub value: f64,
    pub y: f64,
}

/// Fully resolved tooltip chart for one hit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniChartLayout {
    pub chart_box: MiniChartBox,
    pub x_scale: BandScale,
    pub y_scale: LinearScale,
    pub bars: Vec<MiniBarRect>,
    pub y_ticks: Vec<MiniTick>,
}

/// The hit record's values in `series_order`.
#[must_use]
pub fn project(record: &Record, series_order: &[SeriesKey]) -> Vec<MiniBar> {
    series_order
        .iter()
        .map(|key| MiniBar {
            key: *key,
            value: record.value(*key),
        })
        .collect()
}

impl MiniChartLayout {
    /// Lays out `bars` in `chart_box`.
    ///
    /// The value axis spans `[0, max(value)]`; an all-zero record falls back
    /// to `[0, 1]` so every bar has zero height.
    pub fn new(bars: &[MiniBar], chart_box: MiniChartBox) -> ChartResult<Self> {
        let chart_box = chart_box.validate()?;
        let keys: Vec<SeriesKey> = bars.iter().map(|bar| bar.key).collect();
        let x_scale = BandScale::new(&keys, 0.0, chart_box.width, chart_box.padding)?;

        let max_value = bars
            .iter()
            .map(|bar| bar.value)
            .filter(|value| value.is_finite())
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |value| value.0);
        let domain_max = if max_value > 0.0 { max_value } else { 1.0 };
        let y_scale = LinearScale::new(0.0, domain_max, chart_box.plot_height, 0.0)?;

        let bars = bars
            .iter()
            .filter_map(|bar| {
                let x = x_scale.position(bar.key)?;
                let value = if bar.value.is_finite() { bar.value.max(0.0) } else { 0.0 };
                let y = y_scale.scale(value);
                Some(MiniBarRect {
                    key: bar.key,
                    value,
                    x,
                    y,
                    width: x_scale.bandwidth(),
                    height: chart_box.plot_height - y,
                })
            })
            .collect();

        let y_ticks = linear_ticks(0.0, domain_max, chart_box.y_tick_count)
            .into_iter()
            .map(|value| MiniTick {
                value,
                y: y_scale.scale(value),
            })
            .collect();

        Ok(Self {
            chart_box,
            x_scale,
            y_scale,
            bars,
            y_ticks,
        })
    }
}

/// Round-number ticks covering `[start, stop]`, about `count` of them.
pub(crate) fn linear_ticks(start: f64, stop: f64, count: usize) -> SmallVec<[f64; 8]> {
    let mut ticks = SmallVec::new();
    if count == 0 || !start.is_finite() || !stop.is_finite() || stop <= start {
        return ticks;
    }

    let raw_step = (stop - start) / count as f64;
    let power = raw_step.log10().floor();
    let magnitude = 10f64.powf(power);
    let error = raw_step / magnitude;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    // Sub-unit steps divide by an integral inverse so ticks like 0.3 stay exact.
    if power < 0.0 {
        let inverse = 10f64.powf(-power) / factor;
        let first = (start * inverse).ceil() as i64;
        let last = (stop * inverse).floor() as i64;
        for i in first..=last {
            ticks.push(i as f64 / inverse);
        }
    } else {
        let step = factor * magnitude;
        let first = (start / step).ceil() as i64;
        let last = (stop / step).floor() as i64;
        for i in first..=last {
            ticks.push(i as f64 * step);
        }
    }
    ticks
}
