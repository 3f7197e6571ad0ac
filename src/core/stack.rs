use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Record, SeriesKey};
use crate::error::{ChartError, ChartResult};

/// Vertical extent of one series at one sample after stacking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub date: DateTime<Utc>,
    pub low: f64,
    pub high: f64,
}

impl Band {
    #[must_use]
    pub fn thickness(self) -> f64 {
        self.high - self.low
    }
}

/// Stacked bands per series; iteration order is the stacking order.
pub type StackedLayers = IndexMap<SeriesKey, Vec<Band>>;

/// Stacks `records` in `series_order` with a wiggle-minimizing baseline.
///
/// Each band's thickness equals the series value at that sample. The baseline
/// of the whole stack starts at `0` on the first sample and is then shifted at
/// every following sample to minimize the weighted change of the layer
/// midlines between neighbors. Non-finite and negative values count as `0`.
///
/// Empty `records` or an empty `series_order` yields an empty mapping.
pub fn stack(records: &[Record], series_order: &[SeriesKey]) -> ChartResult<StackedLayers> {
    for (index, key) in series_order.iter().enumerate() {
        if series_order[..index].contains(key) {
            return Err(ChartError::InvalidData(format!(
                "series `{key}` appears more than once in the stacking order"
            )));
        }
    }

    if records.is_empty() || series_order.is_empty() {
        return Ok(StackedLayers::new());
    }

    let offsets = wiggle_offsets(records, series_order);
    let mut layers: StackedLayers = series_order
        .iter()
        .map(|key| (*key, Vec::with_capacity(records.len())))
        .collect();

    for (record, baseline) in records.iter().zip(offsets) {
        let mut low = baseline;
        for (key, bands) in layers.iter_mut() {
            let high = low + sanitized_value(record, *key);
            bands.push(Band {
                date: record.date,
                low,
                high,
            });
            low = high;
        }
    }

    trace!(
        records = records.len(),
        series = series_order.len(),
        "stacked streamgraph layers"
    );
    Ok(layers)
}

/// Baseline of the first series at each sample.
fn wiggle_offsets(records: &[Record], series_order: &[SeriesKey]) -> Vec<f64> {
    let mut offsets = Vec::with_capacity(records.len());
    let mut offset = 0.0;
    offsets.push(offset);

    for pair in records.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        let mut total = 0.0;
        let mut weighted = 0.0;
        // Change in the bottom edge of the current layer, accumulated from
        // the layers stacked beneath it.
        let mut below_delta = 0.0;

        for key in series_order {
            let now = sanitized_value(current, *key);
            let before = sanitized_value(previous, *key);
            let delta = now - before;
            let midline_delta = delta / 2.0 + below_delta;

            total += now;
            weighted += midline_delta * now;
            below_delta += delta;
        }

        if total != 0.0 {
            offset -= weighted / total;
        }
        offsets.push(offset);
    }

    offsets
}

fn sanitized_value(record: &Record, key: SeriesKey) -> f64 {
    let value = record.value(key);
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
