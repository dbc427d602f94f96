//! Tests for the CSV reader components

pub mod column_mapping_tests;
pub mod reader_tests;

use csv::StringRecord;

/// Build a record from string fields
pub fn record(fields: &[&str]) -> StringRecord {
    let mut record = StringRecord::new();
    for field in fields {
        record.push_field(field);
    }
    record
}

/// Build records from rows of string fields
pub fn records(rows: &[&[&str]]) -> Vec<StringRecord> {
    rows.iter().map(|fields| record(fields)).collect()
}

/// A well-formed sample table with the standard header
pub fn sample_table() -> &'static str {
    "timestamp,latitude,longitude,title,description\n\
     2025-10-28T09:00:00Z,37.7749,-122.4194,A,d1\n\
     2025-10-28T09:15:00Z,37.7849,-122.4094,B,d2\n"
}
