use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Record};
use crate::error::{ChartError, ChartResult};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Time axis mapping instants onto `[0, width]`.
///
/// Instants are carried as Unix milliseconds so the mapping is linear in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

/// One monthly tick on the time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTick {
    pub time: DateTime<Utc>,
    pub x: f64,
    pub label: String,
}

impl TimeScale {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, pixel_width: f64) -> ChartResult<Self> {
        if !pixel_width.is_finite() || pixel_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale width must be finite and > 0".to_owned(),
            ));
        }
        let linear = LinearScale::from_extent(
            datetime_to_millis(start),
            datetime_to_millis(end),
            MILLIS_PER_DAY,
            0.0,
            pixel_width,
        )?;
        Ok(Self { linear })
    }

    /// Fits the domain to `[min(date), max(date)]` over `records`.
    pub fn from_records(records: &[Record], pixel_width: f64) -> ChartResult<Self> {
        let mut dates = records.iter().map(|record| record.date);
        let first = dates.next().ok_or(ChartError::EmptyInput)?;
        let (min, max) = dates.fold((first, first), |(min, max), date| {
            (min.min(date), max.max(date))
        });
        Self::new(min, max, pixel_width)
    }

    #[must_use]
    pub fn domain(self) -> (DateTime<Utc>, DateTime<Utc>) {
        let (start, end) = self.linear.domain();
        (millis_to_datetime_lossy(start), millis_to_datetime_lossy(end))
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.linear.range().1
    }

    #[must_use]
    pub fn scale(self, time: DateTime<Utc>) -> f64 {
        self.linear.scale(datetime_to_millis(time))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<DateTime<Utc>> {
        millis_to_datetime(self.linear.invert(pixel)?)
    }

    /// Ticks at every UTC month start inside the domain, labelled with the
    /// abbreviated month name.
    #[must_use]
    pub fn month_ticks(self) -> Vec<TimeTick> {
        let (start, end) = self.domain();
        let mut ticks = Vec::new();
        let mut cursor = month_start(start.year(), start.month());
        if let Some(first) = cursor {
            if first < start {
                cursor = next_month_start(first);
            }
        }

        while let Some(time) = cursor {
            if time > end {
                break;
            }
            ticks.push(TimeTick {
                time,
                x: self.scale(time),
                label: time.format("%b").to_string(),
            });
            cursor = next_month_start(time);
        }
        ticks
    }
}

#[must_use]
pub fn datetime_to_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

pub fn millis_to_datetime(millis: f64) -> ChartResult<DateTime<Utc>> {
    if !millis.is_finite() {
        return Err(ChartError::InvalidData("time must be finite".to_owned()));
    }
    DateTime::from_timestamp_millis(millis.round() as i64).ok_or_else(|| {
        ChartError::InvalidData(format!("time {millis}ms is outside the supported range"))
    })
}

fn millis_to_datetime_lossy(millis: f64) -> DateTime<Utc> {
    millis_to_datetime(millis).unwrap_or(DateTime::UNIX_EPOCH)
}

fn month_start(year: i32, month: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()
}

fn next_month_start(time: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if time.month() == 12 {
        month_start(time.year() + 1, 1)
    } else {
        month_start(time.year(), time.month() + 1)
    }
}
