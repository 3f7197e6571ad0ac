use tracing::debug;

use crate::core::{
    LayerGeometry, LayerVertex, Record, SeriesKey, StackedLayers, TimeScale, ValueScale, Viewport,
    build_layer_geometries, stack,
};
use crate::error::ChartResult;

use super::StreamgraphConfig;

/// Everything derived from one record set; rebuilt in full on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot_area: Viewport,
    pub layers: StackedLayers,
    pub time_scale: TimeScale,
    pub value_scale: ValueScale,
    pub geometries: Vec<LayerGeometry>,
}

impl ChartLayout {
    /// Stacks, scales and outlines `records`.
    ///
    /// Returns `Ok(None)` for an empty record set so callers skip drawing.
    pub fn compute(records: &[Record], config: &StreamgraphConfig) -> ChartResult<Option<Self>> {
        if records.is_empty() || config.series_order.is_empty() {
            return Ok(None);
        }

        let plot_area = config.plot_area()?;
        let layers = stack(records, &config.series_order)?;
        let time_scale = TimeScale::from_records(records, f64::from(plot_area.width))?;
        let value_scale = ValueScale::from_layers(&layers, f64::from(plot_area.height))?;
        let geometries = build_layer_geometries(&layers, time_scale, value_scale)?;

        let (value_min, value_max) = value_scale.domain();
        debug!(
            records = records.len(),
            layers = geometries.len(),
            value_min,
            value_max,
            "computed streamgraph layout"
        );

        Ok(Some(Self {
            plot_area,
            layers,
            time_scale,
            value_scale,
            geometries,
        }))
    }

    /// Series whose band lies under the plot-local point `(x, y)`.
    ///
    /// Band edges are interpolated linearly between samples, so points in the
    /// thin sliver between a smoothed edge and its control polygon can resolve
    /// to a neighbor. Later layers are drawn on top and win on shared edges.
    #[must_use]
    pub fn layer_at(&self, x: f64, y: f64) -> Option<SeriesKey> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        self.geometries.iter().rev().find_map(|geometry| {
            let (y_top, y_bottom) = edges_at(&geometry.area.vertices, x)?;
            (y_top..=y_bottom).contains(&y).then_some(geometry.key)
        })
    }
}

/// Pixel `(top, bottom)` of a band at `x`, if `x` is inside its horizontal extent.
fn edges_at(vertices: &[LayerVertex], x: f64) -> Option<(f64, f64)> {
    if let [only] = vertices {
        return (only.x == x).then_some((only.y_high, only.y_low));
    }

    vertices.windows(2).find_map(|pair| {
        let (left, right) = (pair[0], pair[1]);
        if x < left.x.min(right.x) || x > left.x.max(right.x) {
            return None;
        }
        let span = right.x - left.x;
        let t = if span == 0.0 { 0.0 } else { (x - left.x) / span };
        let top = left.y_high + (right.y_high - left.y_high) * t;
        let bottom = left.y_low + (right.y_low - left.y_low) * t;
        Some((top.min(bottom), top.max(bottom)))
    })
}
