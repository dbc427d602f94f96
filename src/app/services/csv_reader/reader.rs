//! Ingestion orchestration for delimited track logs
//!
//! Reads the whole raw table into memory, resolves columns once, validates
//! rows one at a time with warn-and-continue recovery, and applies the
//! requested collection-level transforms before handing the track back.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::record_parser::parse_point_record;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::Track;
use crate::config::{CsvFormatConfig, ProcessingConfig};
use crate::{Error, Result};

/// CSV reader for track logs with configurable format support.
///
/// Ingestion is synchronous and batch-oriented: the entire table is decoded
/// before any row is parsed, the resulting [`Track`] is owned exclusively
/// while it is being built, and ownership moves to the caller on return.
///
/// The reader never sorts. Callers that need chronological order — which is
/// anything path- or sequence-dependent — must invoke
/// [`Track::sort_by_timestamp`] on the result themselves; keeping the two
/// steps separate keeps each independently testable.
#[derive(Debug, Clone)]
pub struct CsvReader {
    format: CsvFormatConfig,
    processing: ProcessingConfig,
}

impl CsvReader {
    /// Create a reader from format and processing configuration
    pub fn new(format: CsvFormatConfig, processing: ProcessingConfig) -> Self {
        Self { format, processing }
    }

    /// Read and parse points from a file on disk
    pub fn read_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Reading track log: {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("cannot open file {}", path.display()), e))?;

        self.read_str(&content, &path.display().to_string())
    }

    /// Read and parse points from in-memory table text.
    ///
    /// `source` labels the input in errors and logs.
    pub fn read_str(&self, content: &str, source: &str) -> Result<ParseResult> {
        let records = self.decode(content, source)?;
        self.parse_records(records)
    }

    /// Decode the raw table into records, tolerating ragged row widths.
    ///
    /// Header handling is the column resolver's job, so the decoder treats
    /// every line as data. A hard decoding failure (broken quoting, invalid
    /// UTF-8 in a field) aborts the batch: without a coherent table there is
    /// no schema to recover rows against.
    fn decode(&self, content: &str, source: &str) -> Result<Vec<StringRecord>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.format.delimiter_byte())
            .from_reader(content.as_bytes());

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result
                .map_err(|e| Error::csv_parsing(source, "cannot read CSV records", Some(e)))?;
            records.push(record);
        }

        debug!("Decoded {} raw rows from {}", records.len(), source);
        Ok(records)
    }

    /// Parse decoded records into a track.
    ///
    /// Applies the configured row skip unconditionally, resolves columns
    /// once, then walks the data rows in file order. Row-local failures are
    /// recovered: the row is logged, recorded in the stats, and excluded.
    /// The batch fails only when the schema cannot be resolved or when zero
    /// rows survive the pass.
    pub fn parse_records(&self, records: Vec<StringRecord>) -> Result<ParseResult> {
        if records.is_empty() {
            return Err(Error::empty_or_insufficient("table has no rows"));
        }

        // Row skipping happens before any header or data interpretation.
        let skip = self.format.skip_rows;
        if skip >= records.len() {
            return Err(Error::empty_or_insufficient(format!(
                "skip_rows={} consumes all {} rows",
                skip,
                records.len()
            )));
        }
        let rows = &records[skip..];

        if self.format.has_header && rows.len() < 2 {
            return Err(Error::empty_or_insufficient(
                "table declares a header but has no data rows",
            ));
        }

        // The single schema gate: resolved once, reused for every row.
        let mapping = ColumnMapping::resolve(rows, &self.format)?;
        debug!("Resolved columns: {:?}", mapping);

        let data_start = usize::from(self.format.has_header);
        let mut stats = ParseStats::new();
        let mut track = Track::new();

        for (offset, record) in rows[data_start..].iter().enumerate() {
            // 1-based absolute file row, matching what an editor shows.
            let row_number = skip + data_start + offset + 1;
            stats.total_rows += 1;

            match parse_point_record(
                record,
                &mapping,
                &self.processing.timestamp_formats,
                row_number,
            ) {
                Ok(point) => {
                    track.push(point);
                    stats.points_parsed += 1;
                }
                Err(e) if e.is_row_local() => {
                    warn!("Skipping row {}: {}", row_number, e);
                    stats.record_skip(row_number, e.to_string());
                }
                Err(e) => return Err(e),
            }
        }

        if track.is_empty() {
            return Err(Error::empty_or_insufficient(format!(
                "no row produced a valid point ({} skipped)",
                stats.rows_skipped
            )));
        }

        if self.processing.remove_duplicates {
            let before = track.len();
            track.dedup_by_location();
            stats.duplicates_removed = before - track.len();
            debug!(
                "Removed {} duplicate coordinate readings",
                stats.duplicates_removed
            );
        }

        info!(
            "Parsed {} points from {} data rows ({} skipped)",
            stats.points_parsed, stats.total_rows, stats.rows_skipped
        );

        Ok(ParseResult { track, stats })
    }
}
