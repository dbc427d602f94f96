//! Tests for column resolution

use super::{record, records};
use crate::app::services::csv_reader::ColumnMapping;
use crate::config::CsvFormatConfig;
use crate::Error;

fn header_config() -> CsvFormatConfig {
    CsvFormatConfig::default()
}

fn headerless_config() -> CsvFormatConfig {
    CsvFormatConfig {
        has_header: false,
        ..Default::default()
    }
}

#[test]
fn test_resolves_default_aliases_case_insensitively() {
    let rows = records(&[&["Time", "LAT", "Lng", "name"]]);
    let mapping = ColumnMapping::resolve(&rows, &header_config()).unwrap();

    assert_eq!(mapping.timestamp, 0);
    assert_eq!(mapping.latitude, 1);
    assert_eq!(mapping.longitude, 2);
    // No configured name, so the unrelated "name" column stays unbound.
    assert_eq!(mapping.title, None);
    assert_eq!(mapping.description, None);
}

#[test]
fn test_configured_name_requires_exact_match() {
    let rows = records(&[&["when", "latitude", "longitude"]]);

    // "when" is not an alias, so resolution fails without an override...
    let err = ColumnMapping::resolve(&rows, &header_config()).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredColumn { .. }));

    // ...and succeeds case-insensitively once configured.
    let config = CsvFormatConfig {
        timestamp_column: Some("WHEN".to_string()),
        ..Default::default()
    };
    let mapping = ColumnMapping::resolve(&rows, &config).unwrap();
    assert_eq!(mapping.timestamp, 0);
}

#[test]
fn test_configured_name_suppresses_aliases() {
    // A configured timestamp name means the "timestamp" alias no longer binds.
    let rows = records(&[&["timestamp", "latitude", "longitude"]]);
    let config = CsvFormatConfig {
        timestamp_column: Some("recorded_at".to_string()),
        ..Default::default()
    };

    let err = ColumnMapping::resolve(&rows, &config).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredColumn { .. }));
}

#[test]
fn test_optional_columns_bind_only_when_configured() {
    let rows = records(&[&["timestamp", "latitude", "longitude", "Title", "Notes"]]);

    let config = CsvFormatConfig {
        title_column: Some("title".to_string()),
        description_column: Some("notes".to_string()),
        ..Default::default()
    };
    let mapping = ColumnMapping::resolve(&rows, &config).unwrap();
    assert_eq!(mapping.title, Some(3));
    assert_eq!(mapping.description, Some(4));
}

#[test]
fn test_missing_required_column_names_all_missing_fields() {
    let rows = records(&[&["timestamp", "latitude"]]);
    let err = ColumnMapping::resolve(&rows, &header_config()).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("longitude"));
    assert!(!message.contains("latitude,"));
}

#[test]
fn test_positional_layout_without_header() {
    let rows = records(&[&["1730131445", "37.7", "-122.4", "home", "start of walk"]]);
    let mapping = ColumnMapping::resolve(&rows, &headerless_config()).unwrap();

    assert_eq!(mapping.timestamp, 0);
    assert_eq!(mapping.latitude, 1);
    assert_eq!(mapping.longitude, 2);
    assert_eq!(mapping.title, Some(3));
    assert_eq!(mapping.description, Some(4));
}

#[test]
fn test_positional_layout_narrow_rows_have_no_optional_columns() {
    let rows = records(&[&["1730131445", "37.7", "-122.4"]]);
    let mapping = ColumnMapping::resolve(&rows, &headerless_config()).unwrap();

    assert_eq!(mapping.title, None);
    assert_eq!(mapping.description, None);
}

#[test]
fn test_min_required_width_covers_largest_index() {
    let mapping = ColumnMapping {
        timestamp: 4,
        latitude: 0,
        longitude: 2,
        title: None,
        description: None,
    };
    assert_eq!(mapping.min_required_width(), 5);
}

#[test]
fn test_later_header_match_overwrites_earlier() {
    // Both "time" and "timestamp" are aliases; the later cell wins.
    let rows = records(&[&["time", "latitude", "longitude", "timestamp"]]);
    let mapping = ColumnMapping::resolve(&rows, &header_config()).unwrap();
    assert_eq!(mapping.timestamp, 3);
}

#[test]
fn test_header_cells_are_trimmed() {
    let rows = vec![record(&[" timestamp ", "  latitude", "longitude  "])];
    let mapping = ColumnMapping::resolve(&rows, &header_config()).unwrap();
    assert_eq!(mapping.timestamp, 0);
    assert_eq!(mapping.latitude, 1);
    assert_eq!(mapping.longitude, 2);
}
