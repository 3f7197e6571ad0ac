#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use streamgraph::core::{Record, SERIES_COUNT};

pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid date")
}

pub fn record(year: i32, month: u32, day: u32, values: [f64; SERIES_COUNT]) -> Record {
    Record::new(utc(year, month, day), values)
}

/// Three month-end samples where each month is carried by a different series.
pub fn rotating_three_months() -> Vec<Record> {
    vec![
        record(2024, 1, 31, [10.0, 0.0, 0.0, 0.0, 0.0]),
        record(2024, 2, 29, [0.0, 10.0, 0.0, 0.0, 0.0]),
        record(2024, 3, 31, [0.0, 0.0, 10.0, 0.0, 0.0]),
    ]
}
