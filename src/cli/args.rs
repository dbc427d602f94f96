//! Command-line argument definitions for geotrace
//!
//! This module defines the CLI interface using the clap derive API and the
//! conversions from flag values into the configuration structs the services
//! consume.

use crate::config::{CsvFormatConfig, MapConfig, ProcessingConfig};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the geotrace track normalizer
///
/// Normalizes GPS track logs from loosely-structured CSV files into clean,
/// chronologically ordered point sequences and renders them as interactive
/// HTML maps.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geotrace",
    version,
    about = "Normalize GPS track logs from CSV and render them as interactive HTML maps",
    long_about = "A tool that ingests tabular location records (timestamp + coordinates + \
                  optional metadata) from delimited text files, normalizes them into a clean \
                  chronological point sequence, and renders the result as a self-contained \
                  interactive HTML map. Tolerates mixed column naming, multiple timestamp \
                  encodings, and malformed rows."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for geotrace
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Ingest a track log and generate an interactive HTML map
    Generate(GenerateArgs),
    /// Ingest a track log and report what was found
    Inspect(InspectArgs),
}

/// Table-layout flags shared by every subcommand
#[derive(Debug, Clone, Parser)]
pub struct FormatArgs {
    /// Header name of the timestamp column (exact, case-insensitive)
    ///
    /// Without this flag the default aliases apply: timestamp, time, datetime.
    #[arg(long = "timestamp-column", value_name = "NAME")]
    pub timestamp_column: Option<String>,

    /// Header name of the latitude column (exact, case-insensitive)
    ///
    /// Without this flag the default aliases apply: latitude, lat.
    #[arg(long = "latitude-column", value_name = "NAME")]
    pub latitude_column: Option<String>,

    /// Header name of the longitude column (exact, case-insensitive)
    ///
    /// Without this flag the default aliases apply: longitude, lon, lng.
    #[arg(long = "longitude-column", value_name = "NAME")]
    pub longitude_column: Option<String>,

    /// Header name of the optional title column
    ///
    /// Titles are only captured when this is set; there are no default aliases.
    #[arg(long = "title-column", value_name = "NAME")]
    pub title_column: Option<String>,

    /// Header name of the optional description column
    ///
    /// Descriptions are only captured when this is set; there are no default aliases.
    #[arg(long = "description-column", value_name = "NAME")]
    pub description_column: Option<String>,

    /// Treat the input as headerless (positional columns: timestamp,
    /// latitude, longitude, then title and description when present)
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Field delimiter, a single ASCII character
    #[arg(long, value_name = "CHAR", default_value = ",")]
    pub delimiter: char,

    /// Rows to discard from the top of the file before any interpretation
    #[arg(long = "skip-rows", value_name = "N", default_value_t = 0)]
    pub skip_rows: usize,

    /// Custom chrono timestamp pattern, tried before the built-in fallbacks
    ///
    /// Repeat the flag to supply several patterns; they are tried in the
    /// order given. Example: --timestamp-format "%d.%m.%Y %H:%M"
    #[arg(long = "timestamp-format", value_name = "PATTERN")]
    pub timestamp_formats: Vec<String>,

    /// Drop points that repeat an earlier point's coordinates (6-decimal
    /// precision), keeping the first occurrence
    #[arg(long)]
    pub dedup: bool,
}

impl FormatArgs {
    /// Build the table-layout configuration from the flags
    pub fn csv_format_config(&self) -> CsvFormatConfig {
        CsvFormatConfig {
            timestamp_column: self.timestamp_column.clone(),
            latitude_column: self.latitude_column.clone(),
            longitude_column: self.longitude_column.clone(),
            title_column: self.title_column.clone(),
            description_column: self.description_column.clone(),
            has_header: !self.no_header,
            delimiter: self.delimiter,
            skip_rows: self.skip_rows,
        }
    }

    /// Build the processing configuration from the flags
    pub fn processing_config(&self) -> ProcessingConfig {
        ProcessingConfig {
            remove_duplicates: self.dedup,
            timestamp_formats: self.timestamp_formats.clone(),
        }
    }
}

/// Arguments for the generate command
#[derive(Debug, Clone, Parser)]
pub struct GenerateArgs {
    /// Input track log (delimited text)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Output HTML file
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "track.html"
    )]
    pub output: PathBuf,

    /// Map and page title
    #[arg(long, value_name = "TEXT", default_value = "GPS Track")]
    pub title: String,

    /// Trail polyline color (CSS color)
    #[arg(long = "path-color", value_name = "COLOR", default_value = "#3388ff")]
    pub path_color: String,

    /// Do not draw the connecting trail between points
    #[arg(long = "no-path")]
    pub no_path: bool,

    #[command(flatten)]
    pub format: FormatArgs,
}

impl GenerateArgs {
    /// Build the map display configuration from the flags
    pub fn map_config(&self) -> MapConfig {
        MapConfig {
            title: self.title.clone(),
            path_color: self.path_color.clone(),
            show_path: !self.no_path,
            ..Default::default()
        }
    }
}

/// Report output formats for the inspect command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Machine-readable JSON report
    Json,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input track log (delimited text)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub layout: FormatArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_format_args() -> FormatArgs {
        FormatArgs {
            timestamp_column: None,
            latitude_column: None,
            longitude_column: None,
            title_column: None,
            description_column: None,
            no_header: false,
            delimiter: ',',
            skip_rows: 0,
            timestamp_formats: Vec::new(),
            dedup: false,
        }
    }

    #[test]
    fn test_format_args_to_csv_config() {
        let mut args = default_format_args();
        args.no_header = true;
        args.delimiter = ';';
        args.skip_rows = 3;
        args.timestamp_column = Some("recorded_at".to_string());

        let config = args.csv_format_config();
        assert!(!config.has_header);
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.skip_rows, 3);
        assert_eq!(config.timestamp_column.as_deref(), Some("recorded_at"));
    }

    #[test]
    fn test_format_args_to_processing_config() {
        let mut args = default_format_args();
        args.dedup = true;
        args.timestamp_formats = vec!["%d.%m.%Y".to_string()];

        let config = args.processing_config();
        assert!(config.remove_duplicates);
        assert_eq!(config.timestamp_formats, vec!["%d.%m.%Y".to_string()]);
    }

    #[test]
    fn test_cli_parses_generate_invocation() {
        let args = Args::parse_from([
            "geotrace",
            "generate",
            "--input",
            "walk.csv",
            "--output",
            "walk.html",
            "--title",
            "Morning Walk",
            "--dedup",
            "--timestamp-format",
            "%d.%m.%Y %H:%M",
        ]);

        match args.command {
            Some(Commands::Generate(generate)) => {
                assert_eq!(generate.input, PathBuf::from("walk.csv"));
                assert_eq!(generate.output, PathBuf::from("walk.html"));
                assert_eq!(generate.title, "Morning Walk");
                assert!(generate.format.dedup);
                assert_eq!(generate.format.timestamp_formats.len(), 1);
            }
            other => panic!("expected generate command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_inspect_json_invocation() {
        let args = Args::parse_from([
            "geotrace", "inspect", "--input", "walk.csv", "--format", "json", "--no-header",
        ]);

        match args.command {
            Some(Commands::Inspect(inspect)) => {
                assert_eq!(inspect.format, OutputFormat::Json);
                assert!(inspect.layout.no_header);
            }
            other => panic!("expected inspect command, got {other:?}"),
        }
    }
}
