//! Map generator implementation

use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::template;
use crate::app::models::Track;
use crate::config::MapConfig;
use crate::{Error, Result};

/// Per-point payload embedded into the generated page
#[derive(Debug, Serialize)]
struct MarkerData<'a> {
    lat: f64,
    lng: f64,
    time: String,
    title: &'a str,
    description: &'a str,
}

/// Renders tracks into self-contained interactive HTML maps
#[derive(Debug, Clone)]
pub struct MapGenerator {
    config: MapConfig,
}

impl MapGenerator {
    /// Create a generator with the given display configuration
    pub fn new(config: MapConfig) -> Self {
        Self { config }
    }

    /// Render the track and write the HTML page to `output`.
    ///
    /// The track is consumed read-only in its current order; callers are
    /// expected to have sorted it chronologically first.
    pub fn generate(&self, track: &Track, output: &Path) -> Result<()> {
        let page = self.render_page(track)?;

        std::fs::write(output, page).map_err(|e| {
            Error::map_rendering(
                output.display().to_string(),
                "cannot write HTML output",
                e,
            )
        })?;

        info!(
            "Generated map with {} points: {}",
            track.len(),
            output.display()
        );
        Ok(())
    }

    /// Render the track into the HTML page text
    pub fn render_page(&self, track: &Track) -> Result<String> {
        let markers: Vec<MarkerData<'_>> = track
            .iter()
            .map(|point| MarkerData {
                lat: point.latitude,
                lng: point.longitude,
                time: point.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                title: &point.title,
                description: &point.description,
            })
            .collect();

        let points_json = serde_json::to_string(&markers).map_err(|e| {
            Error::configuration(format!("cannot serialize track points: {e}"))
        })?;
        // Keep an embedded "</script>" in point metadata from terminating
        // the script element early.
        let points_json = points_json.replace("</", "<\\/");

        let (start, end) = track.time_range();

        Ok(template::render(&[
            ("__TITLE__", html_escape(&self.config.title)),
            ("__POINT_COUNT__", track.len().to_string()),
            ("__START_TIME__", start.format("%Y-%m-%d %H:%M").to_string()),
            ("__END_TIME__", end.format("%Y-%m-%d %H:%M").to_string()),
            ("__POINTS_JSON__", points_json),
            ("__PATH_COLOR__", html_escape(&self.config.path_color)),
            ("__PATH_WEIGHT__", self.config.path_weight.to_string()),
            ("__PATH_OPACITY__", self.config.path_opacity.to_string()),
            ("__SHOW_PATH__", self.config.show_path.to_string()),
            ("__MAX_ZOOM__", self.config.max_zoom.to_string()),
        ]))
    }
}

/// Minimal HTML escaping for text interpolated outside the JSON payload
fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
