use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, StackedLayers};
use crate::error::{ChartError, ChartResult};

/// Vertical mapping of stacked values onto an inverted pixel axis.
///
/// `domain_min` maps to the plot bottom (`height`) and `domain_max` to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    pub fn new(domain_min: f64, domain_max: f64, pixel_height: f64) -> ChartResult<Self> {
        if !pixel_height.is_finite() || pixel_height <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale height must be finite and > 0".to_owned(),
            ));
        }
        let linear = LinearScale::from_extent(domain_min, domain_max, 1.0, pixel_height, 0.0)?;
        Ok(Self { linear })
    }

    /// Fits the domain to `[min(low), max(high)]` across every band.
    pub fn from_layers(layers: &StackedLayers, pixel_height: f64) -> ChartResult<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for band in layers.values().flatten() {
            min = min.min(band.low);
            max = max.max(band.high);
        }

        if min > max {
            return Err(ChartError::EmptyInput);
        }
        Self::new(min, max, pixel_height)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn scale(self, value: f64) -> f64 {
        self.linear.scale(value)
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        self.linear.invert(pixel)
    }
}
