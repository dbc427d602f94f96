//! Column resolution for flexible table layouts
//!
//! This module maps the logical fields (timestamp, latitude, longitude,
//! title, description) to physical column positions, either by header-name
//! matching or by positional convention for headerless tables.

use crate::config::CsvFormatConfig;
use crate::constants::{aliases, positional};
use crate::{Error, Result};
use csv::StringRecord;

/// Resolved mapping from logical field to physical column index.
///
/// Built once per ingestion run from the post-skip row set and consulted for
/// every data row; indices are never re-derived per row. Title and
/// description are `None` when unresolved, which is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Timestamp column index
    pub timestamp: usize,

    /// Latitude column index
    pub latitude: usize,

    /// Longitude column index
    pub longitude: usize,

    /// Title column index, when resolved
    pub title: Option<usize>,

    /// Description column index, when resolved
    pub description: Option<usize>,
}

impl ColumnMapping {
    /// Resolve column positions from the post-skip row set.
    ///
    /// With a declared header the first row is matched by name; without one
    /// the positional convention applies (timestamp, latitude, longitude,
    /// then title and description when the first row is wide enough).
    ///
    /// Fails with `MissingRequiredColumn` when any of timestamp, latitude,
    /// or longitude cannot be resolved.
    pub fn resolve(rows: &[StringRecord], format: &CsvFormatConfig) -> Result<Self> {
        if format.has_header {
            let header = rows.first().ok_or_else(|| {
                Error::empty_or_insufficient("cannot resolve columns from an empty table")
            })?;
            Self::from_header(header, format)
        } else {
            let width = rows.first().map(StringRecord::len).unwrap_or(0);
            Ok(Self::positional(width))
        }
    }

    /// Match header cells case-insensitively against configured names or
    /// default aliases. A later header cell that also matches overwrites an
    /// earlier one.
    fn from_header(header: &StringRecord, format: &CsvFormatConfig) -> Result<Self> {
        let mut timestamp = None;
        let mut latitude = None;
        let mut longitude = None;
        let mut title = None;
        let mut description = None;

        for (index, cell) in header.iter().enumerate() {
            let name = cell.trim().to_lowercase();

            if matches_column(&name, format.timestamp_column.as_deref(), &aliases::TIMESTAMP) {
                timestamp = Some(index);
            }

            if matches_column(&name, format.latitude_column.as_deref(), &aliases::LATITUDE) {
                latitude = Some(index);
            }

            if matches_column(&name, format.longitude_column.as_deref(), &aliases::LONGITUDE) {
                longitude = Some(index);
            }

            // Optional columns bind only when a name is configured, so an
            // unrelated column is never captured by accident.
            if let Some(configured) = format.title_column.as_deref() {
                if name == configured.to_lowercase() {
                    title = Some(index);
                }
            }

            if let Some(configured) = format.description_column.as_deref() {
                if name == configured.to_lowercase() {
                    description = Some(index);
                }
            }
        }

        match (timestamp, latitude, longitude) {
            (Some(timestamp), Some(latitude), Some(longitude)) => Ok(Self {
                timestamp,
                latitude,
                longitude,
                title,
                description,
            }),
            _ => {
                let mut missing = Vec::new();
                if timestamp.is_none() {
                    missing.push("timestamp");
                }
                if latitude.is_none() {
                    missing.push("latitude");
                }
                if longitude.is_none() {
                    missing.push("longitude");
                }
                Err(Error::missing_required_column(&missing))
            }
        }
    }

    /// Positional layout for headerless tables
    fn positional(first_row_width: usize) -> Self {
        Self {
            timestamp: positional::TIMESTAMP,
            latitude: positional::LATITUDE,
            longitude: positional::LONGITUDE,
            title: (first_row_width > positional::TITLE).then_some(positional::TITLE),
            description: (first_row_width > positional::DESCRIPTION)
                .then_some(positional::DESCRIPTION),
        }
    }

    /// Smallest row width that covers every required column
    pub fn min_required_width(&self) -> usize {
        self.timestamp.max(self.latitude).max(self.longitude) + 1
    }
}

/// Check a lowercased header cell against the configured name or the
/// default alias list. A configured name demands an exact case-insensitive
/// match and suppresses the aliases.
fn matches_column(name: &str, configured: Option<&str>, defaults: &[&str]) -> bool {
    match configured {
        Some(configured) => name == configured.to_lowercase(),
        None => defaults.contains(&name),
    }
}
