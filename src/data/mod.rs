//! Record ingestion from the five-series CSV layout.

mod csv_records;

pub use csv_records::{DATE_COLUMN, DATE_FORMAT, parse_records, read_records};
