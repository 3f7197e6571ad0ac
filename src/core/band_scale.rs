use serde::{Deserialize, Serialize};

use crate::core::SeriesKey;
use crate::error::{ChartError, ChartResult};

/// Categorical scale assigning each series an equal-width band.
///
/// `padding` is used for both the inner gap between bands and the outer gap
/// at each end, in units of one step. Bands are centered in the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    domain: Vec<SeriesKey>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(
        domain: &[SeriesKey],
        range_start: f64,
        range_end: f64,
        padding: f64,
    ) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() || range_end < range_start {
            return Err(ChartError::InvalidData(
                "band scale range must be finite and ascending".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..=1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band scale padding must be in [0, 1]".to_owned(),
            ));
        }

        let n = domain.len() as f64;
        let extent = range_end - range_start;
        let step = extent / (n - padding + padding * 2.0).max(1.0);
        let start = range_start + (extent - step * (n - padding)) * 0.5;

        Ok(Self {
            domain: domain.to_vec(),
            start,
            step,
            bandwidth: step * (1.0 - padding),
        })
    }

    #[must_use]
    pub fn domain(&self) -> &[SeriesKey] {
        &self.domain
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Left edge of the band for `key`, or `None` when the key is not in the domain.
    #[must_use]
    pub fn position(&self, key: SeriesKey) -> Option<f64> {
        self.domain
            .iter()
            .position(|candidate| *candidate == key)
            .map(|index| self.start + self.step * index as f64)
    }
}
