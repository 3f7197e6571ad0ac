use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::core::{Record, SERIES_COUNT, SeriesKey};
use crate::error::{ChartError, ChartResult};

pub const DATE_COLUMN: &str = "Date";
/// `MM/DD/YY`; two-digit years 69..=99 map to the 1900s, the rest to the 2000s.
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// Parses CSV text with a header row into records, in file order.
///
/// Series columns are looked up by header name and may appear in any order.
/// A missing series column or an empty/non-numeric cell reads as `0`. Rows
/// whose date cannot be parsed are skipped.
pub fn parse_records(text: &str) -> ChartResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let date_column = headers
        .iter()
        .position(|header| header == DATE_COLUMN)
        .ok_or_else(|| ChartError::InvalidData(format!("missing `{DATE_COLUMN}` column")))?;
    let series_columns: [Option<usize>; SERIES_COUNT] =
        SeriesKey::ALL.map(|key| headers.iter().position(|header| header == key.as_str()));

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.iter().all(str::is_empty) {
            continue;
        }

        let raw_date = row.get(date_column).unwrap_or_default();
        let Some(date) = parse_date(raw_date) else {
            let line = row.position().map(csv::Position::line);
            warn!(?line, value = raw_date, "skipping row with unparseable date");
            continue;
        };
        let values = series_columns.map(|column| {
            column
                .and_then(|column| row.get(column))
                .map_or(0.0, parse_value)
        });
        records.push(Record::new(date, values));
    }

    debug!(count = records.len(), "parsed csv records");
    Ok(records)
}

pub fn read_records(path: &Path) -> ChartResult<Vec<Record>> {
    let text = std::fs::read_to_string(path)?;
    parse_records(&text)
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()?
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
}

fn parse_value(raw: &str) -> f64 {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
