use serde::{Deserialize, Serialize};

use crate::core::curve::{BasisCurve, PathCommand, svg_path_data};
use crate::core::{Band, SeriesKey, StackedLayers, TimeScale, ValueScale};
use crate::error::{ChartError, ChartResult};

/// Band edges of one sample in plot-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerVertex {
    pub x: f64,
    pub y_low: f64,
    pub y_high: f64,
}

/// Smoothed closed outline for one series.
///
/// `vertices` are the unsmoothed control points; `path` traces the top edge
/// left to right, then the bottom edge right to left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPath {
    pub vertices: Vec<LayerVertex>,
    pub path: Vec<PathCommand>,
}

impl AreaPath {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            path: Vec::new(),
        }
    }

    #[must_use]
    pub fn svg_path_data(&self) -> String {
        svg_path_data(&self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerGeometry {
    pub key: SeriesKey,
    pub area: AreaPath,
}

/// Builds the smoothed area outline for one series' band sequence.
pub fn build_area_path(
    bands: &[Band],
    time_scale: TimeScale,
    value_scale: ValueScale,
) -> ChartResult<AreaPath> {
    if bands.is_empty() {
        return Ok(AreaPath::empty());
    }

    let vertices: Vec<LayerVertex> = bands
        .iter()
        .map(|band| LayerVertex {
            x: time_scale.scale(band.date),
            y_low: value_scale.scale(band.low),
            y_high: value_scale.scale(band.high),
        })
        .collect();

    if vertices
        .iter()
        .any(|v| !v.x.is_finite() || !v.y_low.is_finite() || !v.y_high.is_finite())
    {
        return Err(ChartError::InvalidData(
            "area vertices must be finite".to_owned(),
        ));
    }

    let mut path = Vec::with_capacity(vertices.len() * 2 + 6);
    let mut curve = BasisCurve::new(&mut path);
    curve.area_start();
    curve.line_start();
    for vertex in &vertices {
        curve.point(vertex.x, vertex.y_high);
    }
    curve.line_end();
    curve.line_start();
    for vertex in vertices.iter().rev() {
        curve.point(vertex.x, vertex.y_low);
    }
    curve.line_end();
    curve.area_end();

    Ok(AreaPath { vertices, path })
}

/// Builds one outline per layer, in stacking order.
pub fn build_layer_geometries(
    layers: &StackedLayers,
    time_scale: TimeScale,
    value_scale: ValueScale,
) -> ChartResult<Vec<LayerGeometry>> {
    layers
        .iter()
        .map(|(key, bands)| {
            Ok(LayerGeometry {
                key: *key,
                area: build_area_path(bands, time_scale, value_scale)?,
            })
        })
        .collect()
}
