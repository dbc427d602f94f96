//! Tests for the ingestion orchestrator

use super::sample_table;
use crate::app::services::csv_reader::CsvReader;
use crate::config::{CsvFormatConfig, ProcessingConfig};
use crate::Error;
use chrono::{TimeZone, Utc};

fn default_reader() -> CsvReader {
    CsvReader::new(CsvFormatConfig::default(), ProcessingConfig::default())
}

#[test]
fn test_reads_header_table_in_file_order() {
    let result = default_reader().read_str(sample_table(), "test").unwrap();

    assert_eq!(result.track.len(), 2);
    assert_eq!(result.stats.total_rows, 2);
    assert_eq!(result.stats.points_parsed, 2);
    assert_eq!(result.stats.rows_skipped, 0);

    // Output order is file row order; the reader never sorts.
    assert_eq!(result.track.points()[0].title, "A");
    assert_eq!(result.track.points()[1].title, "B");
}

#[test]
fn test_malformed_rows_are_recovered_not_fatal() {
    let content = "timestamp,latitude,longitude\n\
                   2025-10-28T09:00:00Z,37.7749,-122.4194\n\
                   garbage,37.8,-122.4\n\
                   2025-10-28T09:30:00Z,not-a-number,-122.4\n\
                   2025-10-28T09:45:00Z,37.8049,-122.3994\n";

    let result = default_reader().read_str(content, "test").unwrap();

    assert_eq!(result.track.len(), 2);
    assert_eq!(result.stats.rows_skipped, 2);
    assert_eq!(result.stats.skips.len(), 2);

    // Diagnostics carry absolute 1-based file rows and the failure reason.
    assert_eq!(result.stats.skips[0].row, 3);
    assert!(result.stats.skips[0].reason.contains("garbage"));
    assert_eq!(result.stats.skips[1].row, 4);
    assert!(result.stats.skips[1].reason.contains("latitude"));
}

#[test]
fn test_missing_required_column_is_fatal() {
    let content = "timestamp,latitude\n2025-10-28T09:00:00Z,37.7749\n";
    let err = default_reader().read_str(content, "test").unwrap_err();
    assert!(matches!(err, Error::MissingRequiredColumn { .. }));
}

#[test]
fn test_empty_table_is_fatal() {
    let err = default_reader().read_str("", "test").unwrap_err();
    assert!(matches!(err, Error::EmptyOrInsufficientData { .. }));
}

#[test]
fn test_header_without_data_rows_is_fatal() {
    let err = default_reader()
        .read_str("timestamp,latitude,longitude\n", "test")
        .unwrap_err();
    assert!(matches!(err, Error::EmptyOrInsufficientData { .. }));
}

#[test]
fn test_zero_valid_rows_is_an_explicit_error() {
    let content = "timestamp,latitude,longitude\n\
                   garbage,x,y\n\
                   also-garbage,x,y\n";
    let err = default_reader().read_str(content, "test").unwrap_err();

    match err {
        Error::EmptyOrInsufficientData { reason } => assert!(reason.contains("2 skipped")),
        other => panic!("expected EmptyOrInsufficientData, got {other:?}"),
    }
}

#[test]
fn test_skip_rows_applied_before_header() {
    let content = "# exported by tracker v2\n\
                   # device: unit-7\n\
                   timestamp,latitude,longitude\n\
                   2025-10-28T09:00:00Z,37.7749,-122.4194\n";

    let format = CsvFormatConfig {
        skip_rows: 2,
        ..Default::default()
    };
    let reader = CsvReader::new(format, ProcessingConfig::default());
    let result = reader.read_str(content, "test").unwrap();

    assert_eq!(result.track.len(), 1);
    // Row numbering stays absolute: the single data row is file row 4.
    assert_eq!(result.stats.total_rows, 1);
}

#[test]
fn test_skip_rows_consuming_everything_is_fatal() {
    let format = CsvFormatConfig {
        skip_rows: 10,
        ..Default::default()
    };
    let reader = CsvReader::new(format, ProcessingConfig::default());
    let err = reader.read_str(sample_table(), "test").unwrap_err();
    assert!(matches!(err, Error::EmptyOrInsufficientData { .. }));
}

#[test]
fn test_headerless_positional_table() {
    let content = "1730131445,37.7749,-122.4194,home\n\
                   1730131745,37.7849,-122.4094,work\n";

    let format = CsvFormatConfig {
        has_header: false,
        ..Default::default()
    };
    let reader = CsvReader::new(format, ProcessingConfig::default());
    let result = reader.read_str(content, "test").unwrap();

    assert_eq!(result.track.len(), 2);
    assert_eq!(result.track.points()[0].title, "home");
    assert_eq!(
        result.track.points()[0].timestamp,
        Utc.timestamp_opt(1_730_131_445, 0).unwrap()
    );
}

#[test]
fn test_custom_delimiter() {
    let content = "timestamp;latitude;longitude\n\
                   2025-10-28T09:00:00Z;37.7749;-122.4194\n";

    let format = CsvFormatConfig {
        delimiter: ';',
        ..Default::default()
    };
    let reader = CsvReader::new(format, ProcessingConfig::default());
    let result = reader.read_str(content, "test").unwrap();
    assert_eq!(result.track.len(), 1);
}

#[test]
fn test_dedup_applied_when_requested() {
    let content = "timestamp,latitude,longitude,title\n\
                   2025-10-28T09:00:00Z,37.774900,-122.419400,first\n\
                   2025-10-28T10:00:00Z,37.774900,-122.419400,second\n\
                   2025-10-28T11:00:00Z,37.784900,-122.409400,third\n";

    let format = CsvFormatConfig {
        title_column: Some("title".to_string()),
        ..Default::default()
    };
    let processing = ProcessingConfig {
        remove_duplicates: true,
        ..Default::default()
    };
    let reader = CsvReader::new(format, processing);
    let result = reader.read_str(content, "test").unwrap();

    // Coordinate-only dedup: the later reading at the same spot is dropped
    // even though its timestamp and title differ.
    assert_eq!(result.track.len(), 2);
    assert_eq!(result.stats.duplicates_removed, 1);
    assert_eq!(result.track.points()[0].title, "first");
    assert_eq!(result.track.points()[1].title, "third");
}

#[test]
fn test_result_length_matches_valid_row_count() {
    let content = "timestamp,latitude,longitude\n\
                   2025-10-28T09:00:00Z,37.7749,-122.4194\n\
                   bad,bad,bad\n\
                   2025-10-28T09:30:00Z,37.7949,-122.3994\n";

    let result = default_reader().read_str(content, "test").unwrap();
    assert_eq!(
        result.track.len(),
        result.stats.points_parsed
    );
    assert_eq!(
        result.stats.total_rows,
        result.stats.points_parsed + result.stats.rows_skipped
    );
}

#[test]
fn test_ragged_short_row_is_row_local() {
    let content = "timestamp,latitude,longitude\n\
                   2025-10-28T09:00:00Z,37.7749,-122.4194\n\
                   2025-10-28T09:10:00Z,37.7800\n";

    let result = default_reader().read_str(content, "test").unwrap();
    assert_eq!(result.track.len(), 1);
    assert_eq!(result.stats.rows_skipped, 1);
    assert!(result.stats.skips[0].reason.contains("columns"));
}
