//! CSV reader for loosely-structured track logs
//!
//! This module turns a delimited text table into a clean [`crate::Track`],
//! tolerating heterogeneous column naming, mixed timestamp encodings, and
//! malformed rows.
//!
//! ## Architecture
//!
//! The reader is organized into logical components:
//! - [`reader`] - Ingestion orchestration and file handling
//! - [`column_mapping`] - One-shot resolution of logical fields to column indices
//! - [`timestamp`] - Timestamp normalization across format fallback chains
//! - [`record_parser`] - Individual row validation and conversion
//! - [`stats`] - Parse statistics and skip diagnostics
//!
//! ## Usage
//!
//! ```rust
//! use geotrace::app::services::csv_reader::CsvReader;
//! use geotrace::config::{CsvFormatConfig, ProcessingConfig};
//!
//! # fn example() -> geotrace::Result<()> {
//! let reader = CsvReader::new(CsvFormatConfig::default(), ProcessingConfig::default());
//! let result = reader.read_file(std::path::Path::new("track.csv"))?;
//!
//! println!("parsed {} points from {} rows",
//!          result.stats.points_parsed,
//!          result.stats.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod record_parser;
pub mod reader;
pub mod stats;
pub mod timestamp;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use reader::CsvReader;
pub use stats::{ParseResult, ParseStats, SkipDiagnostic};
