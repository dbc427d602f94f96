//! Individual row validation and conversion
//!
//! Converts one raw row into a [`Point`] given the resolved column mapping,
//! reporting row-local failures that the orchestrator recovers from.

use csv::StringRecord;

use super::column_mapping::ColumnMapping;
use super::timestamp::parse_timestamp;
use crate::app::models::Point;
use crate::{Error, Result};

/// Parse a single data row into a point.
///
/// `row` is the 1-based absolute file row number, used only for
/// diagnostics. Latitude and longitude are parsed as decimal degrees after
/// trimming; numerically out-of-range values pass through untouched — range
/// policy belongs to downstream consumers. A missing or out-of-range title
/// or description column leaves the field empty, never fails.
pub fn parse_point_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
    custom_formats: &[String],
    row: usize,
) -> Result<Point> {
    let needed = mapping.min_required_width();
    if record.len() < needed {
        return Err(Error::insufficient_columns(row, needed, record.len()));
    }

    // Required indices are in range after the width check.
    let timestamp_text = field(record, mapping.timestamp);
    let timestamp = parse_timestamp(timestamp_text, custom_formats)
        .map_err(|source| Error::invalid_timestamp(row, timestamp_text, source))?;

    let latitude_text = field(record, mapping.latitude);
    let latitude = latitude_text
        .parse::<f64>()
        .map_err(|source| Error::invalid_coordinate(row, "latitude", latitude_text, source))?;

    let longitude_text = field(record, mapping.longitude);
    let longitude = longitude_text
        .parse::<f64>()
        .map_err(|source| Error::invalid_coordinate(row, "longitude", longitude_text, source))?;

    let mut point = Point::new(timestamp, latitude, longitude);
    point.title = optional_field(record, mapping.title);
    point.description = optional_field(record, mapping.description);

    Ok(point)
}

/// Trimmed cell at a required index
fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or_default().trim()
}

/// Trimmed cell at an optional index, empty when unresolved or out of range
fn optional_field(record: &StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|index| record.get(index))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
