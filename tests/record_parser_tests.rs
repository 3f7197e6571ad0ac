mod support;

use streamgraph::core::SeriesKey;
use streamgraph::data::{parse_records, read_records};
use streamgraph::error::ChartError;
use support::utc;

#[test]
fn parses_rows_in_file_order() {
    let text = "\
Date,GPT-4,Gemini,PaLM-2,Claude,LLaMA-3.1
01/31/24,10,2,3,4,5
02/29/24,1.5,20,0,0,0
";
    let records = parse_records(text).expect("parse");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, utc(2024, 1, 31));
    assert_eq!(records[0].values, [10.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(records[1].date, utc(2024, 2, 29));
    assert_eq!(records[1].value(SeriesKey::Gpt4), 1.5);
}

#[test]
fn columns_are_matched_by_header_name() {
    let text = "\
LLaMA-3.1,Claude,Date,Gemini,GPT-4,PaLM-2
5,4,03/31/24,2,1,3
";
    let records = parse_records(text).expect("parse");
    assert_eq!(records[0].values, [1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(records[0].date, utc(2024, 3, 31));
}

#[test]
fn bad_or_missing_cells_read_as_zero() {
    let text = "\
Date,GPT-4,Gemini,PaLM-2
01/31/24,n/a,,7
02/29/24,NaN,3
03/31/24,12abc,4.5,
";
    let records = parse_records(text).expect("parse");
    assert_eq!(records[0].values, [0.0, 0.0, 7.0, 0.0, 0.0]);
    assert_eq!(records[1].values, [0.0, 3.0, 0.0, 0.0, 0.0]);
    // Cells must be a whole number; a numeric prefix is not enough.
    assert_eq!(records[2].values, [0.0, 4.5, 0.0, 0.0, 0.0]);
}

#[test]
fn blank_lines_and_padding_are_ignored() {
    let text = "Date, GPT-4 ,Gemini\n\n 01/31/24 , 4 , 2 \n\n,,\n";
    let records = parse_records(text).expect("parse");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value(SeriesKey::Gpt4), 4.0);
    assert_eq!(records[0].value(SeriesKey::Gemini), 2.0);
}

#[test]
fn unparseable_dates_are_skipped() {
    let text = "\
Date,GPT-4
2024-01-31,1
02/29/24,2
13/45/24,3
";
    let records = parse_records(text).expect("parse");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, utc(2024, 2, 29));
}

#[test]
fn two_digit_years_pivot_at_69() {
    let text = "Date,GPT-4\n12/31/68,1\n01/31/69,1\n";
    let records = parse_records(text).expect("parse");
    assert_eq!(records[0].date, utc(2068, 12, 31));
    assert_eq!(records[1].date, utc(1969, 1, 31));
}

#[test]
fn missing_date_column_is_an_error() {
    let err = parse_records("GPT-4,Gemini\n1,2\n").expect_err("no date column");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn header_only_input_is_empty() {
    let records = parse_records("Date,GPT-4\n").expect("parse");
    assert!(records.is_empty());
}

#[test]
fn reads_records_from_disk() {
    let path = std::env::temp_dir().join(format!(
        "streamgraph-records-test-{}.csv",
        std::process::id()
    ));
    std::fs::write(&path, "Date,Claude\n04/30/24,9\n").expect("write fixture");
    let records = read_records(&path);
    let _ = std::fs::remove_file(&path);

    let records = records.expect("read");
    assert_eq!(records[0].value(SeriesKey::Claude), 9.0);

    let missing = read_records(std::path::Path::new("/definitely/not/here.csv"));
    assert!(matches!(missing, Err(ChartError::Io(_))));
}
