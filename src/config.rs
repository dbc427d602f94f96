//! Configuration structures for ingestion and rendering.
//!
//! Plain immutable configuration structs, built once (typically from CLI
//! flags) and passed by reference into the services that consume them. None
//! of them hold mutable package state.

use crate::constants::DEFAULT_DELIMITER;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Physical layout of the input table.
///
/// Column names are optional overrides: when set, header matching demands an
/// exact case-insensitive match; when unset, the default aliases in
/// [`crate::constants::aliases`] apply. Title and description bind only when
/// a name is configured here (or positionally, for headerless tables).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvFormatConfig {
    /// Configured header name for the timestamp column
    pub timestamp_column: Option<String>,

    /// Configured header name for the latitude column
    pub latitude_column: Option<String>,

    /// Configured header name for the longitude column
    pub longitude_column: Option<String>,

    /// Configured header name for the optional title column
    pub title_column: Option<String>,

    /// Configured header name for the optional description column
    pub description_column: Option<String>,

    /// Whether the first (post-skip) row is a header row
    pub has_header: bool,

    /// Field delimiter, a single ASCII character
    pub delimiter: char,

    /// Rows discarded from the top of the file before any interpretation
    pub skip_rows: usize,
}

impl Default for CsvFormatConfig {
    fn default() -> Self {
        Self {
            timestamp_column: None,
            latitude_column: None,
            longitude_column: None,
            title_column: None,
            description_column: None,
            has_header: true,
            delimiter: DEFAULT_DELIMITER,
            skip_rows: 0,
        }
    }
}

impl CsvFormatConfig {
    /// Validate the format configuration
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(Error::configuration(format!(
                "delimiter '{}' is not a single ASCII character",
                self.delimiter
            )));
        }

        Ok(())
    }

    /// The delimiter as the single byte the CSV decoder expects.
    ///
    /// Only valid after [`validate`](Self::validate) has passed.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}

/// Processing options applied during and after row parsing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Remove points that share a coordinate key, keeping the first
    pub remove_duplicates: bool,

    /// Custom chrono format patterns tried before the built-in fallbacks,
    /// in list order
    pub timestamp_formats: Vec<String>,
}

/// Display parameters for the rendered HTML map
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Page and banner title
    pub title: String,

    /// Trail polyline color (CSS color)
    pub path_color: String,

    /// Trail polyline thickness in pixels
    pub path_weight: u32,

    /// Trail polyline opacity (0.0 to 1.0)
    pub path_opacity: f64,

    /// Whether to draw the connecting trail between points
    pub show_path: bool,

    /// Upper bound on the zoom level chosen when fitting the view to the track
    pub max_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: "GPS Track".to_string(),
            path_color: "#3388ff".to_string(),
            path_weight: 4,
            path_opacity: 0.8,
            show_path: true,
            max_zoom: 16,
        }
    }
}

impl MapConfig {
    /// Validate the map configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.path_opacity) {
            return Err(Error::configuration(format!(
                "path opacity {} must be between 0.0 and 1.0",
                self.path_opacity
            )));
        }

        if self.title.trim().is_empty() {
            return Err(Error::configuration("map title cannot be empty"));
        }

        Ok(())
    }
}
