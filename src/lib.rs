//! Geotrace Library
//!
//! A Rust library for normalizing GPS track logs from loosely-structured
//! delimited text files into clean, chronologically ordered point sequences.
//!
//! This library provides tools for:
//! - Parsing delimited location tables with flexible column detection
//! - Normalizing heterogeneous timestamp encodings to UTC instants
//! - Recovering from malformed rows without aborting the batch
//! - Deduplicating coordinate readings and deriving geometric aggregates
//! - Rendering finished tracks as self-contained interactive HTML maps

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_reader;
        pub mod map_generator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{GeoBounds, Point, Track};
pub use app::services::csv_reader::CsvReader;
pub use config::{CsvFormatConfig, MapConfig, ProcessingConfig};

/// Result type alias for geotrace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for track ingestion and rendering operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error (malformed quoting, invalid UTF-8, ...)
    #[error("CSV parsing error in '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A required logical column could not be resolved to a physical index
    #[error("required column(s) could not be resolved: {columns}")]
    MissingRequiredColumn { columns: String },

    /// The table holds no processable rows, or no row survived validation
    #[error("no usable data: {reason}")]
    EmptyOrInsufficientData { reason: String },

    /// Row does not cover the resolved required column indices
    #[error("row {row}: expected at least {needed} columns, found {found}")]
    InsufficientColumns {
        row: usize,
        needed: usize,
        found: usize,
    },

    /// Row carries a timestamp cell that no format could parse
    #[error("row {row}: invalid timestamp '{value}'")]
    InvalidTimestamp {
        row: usize,
        value: String,
        #[source]
        source: Box<Error>,
    },

    /// Row carries a coordinate cell that is not a decimal number
    #[error("row {row}: invalid {axis} '{value}'")]
    InvalidCoordinate {
        row: usize,
        axis: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Timestamp text matched no custom format, no fallback format, and is
    /// not an integer epoch-seconds value
    #[error("cannot parse timestamp '{value}' with any known format")]
    UnparseableTimestamp { value: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Map rendering error
    #[error("map rendering error for '{path}': {message}")]
    MapRendering {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing-required-column error from the unresolved field names
    pub fn missing_required_column(columns: &[&str]) -> Self {
        Self::MissingRequiredColumn {
            columns: columns.join(", "),
        }
    }

    /// Create an empty-or-insufficient-data error
    pub fn empty_or_insufficient(reason: impl Into<String>) -> Self {
        Self::EmptyOrInsufficientData {
            reason: reason.into(),
        }
    }

    /// Create an insufficient-columns error for a data row
    pub fn insufficient_columns(row: usize, needed: usize, found: usize) -> Self {
        Self::InsufficientColumns { row, needed, found }
    }

    /// Create an invalid-timestamp error wrapping the parse failure
    pub fn invalid_timestamp(row: usize, value: impl Into<String>, source: Error) -> Self {
        Self::InvalidTimestamp {
            row,
            value: value.into(),
            source: Box::new(source),
        }
    }

    /// Create an invalid-coordinate error for one axis
    pub fn invalid_coordinate(
        row: usize,
        axis: &'static str,
        value: impl Into<String>,
        source: std::num::ParseFloatError,
    ) -> Self {
        Self::InvalidCoordinate {
            row,
            axis,
            value: value.into(),
            source,
        }
    }

    /// Create an unparseable-timestamp error carrying the original text
    pub fn unparseable_timestamp(value: impl Into<String>) -> Self {
        Self::UnparseableTimestamp {
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a map rendering error
    pub fn map_rendering(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::MapRendering {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Whether this error is local to a single row.
    ///
    /// Row-local errors are recovered during ingestion: the row is skipped
    /// with a logged warning and the batch continues. Everything else aborts
    /// the batch.
    pub fn is_row_local(&self) -> bool {
        matches!(
            self,
            Self::InsufficientColumns { .. }
                | Self::InvalidTimestamp { .. }
                | Self::InvalidCoordinate { .. }
                | Self::UnparseableTimestamp { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
