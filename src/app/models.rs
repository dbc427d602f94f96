//! Data models for normalized track data
//!
//! This module contains the core data structures for representing geotagged
//! observations and the ordered collections they accumulate into.

use crate::constants::coordinate_key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// Point Structure
// =============================================================================

/// A single normalized, timestamped geographic observation.
///
/// Coordinates are decimal degrees: latitude is meaningful in [-90, 90] and
/// longitude in [-180, 180], but out-of-range values are passed through
/// rather than rejected — range policy belongs to downstream consumers.
/// A point is not mutated after construction; reordering and removal happen
/// only through explicit [`Track`] operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Instant this observation was recorded, normalized to UTC
    pub timestamp: DateTime<Utc>,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Display label, empty when the source row carried none
    pub title: String,

    /// Free-text details, empty when the source row carried none
    pub description: String,
}

impl Point {
    /// Create a point with empty metadata
    pub fn new(timestamp: DateTime<Utc>, latitude: f64, longitude: f64) -> Self {
        Self {
            timestamp,
            latitude,
            longitude,
            title: String::new(),
            description: String::new(),
        }
    }

    /// Coordinate identity used for duplicate detection (6 decimal places)
    pub fn coordinate_key(&self) -> String {
        coordinate_key(self.latitude, self.longitude)
    }
}

// =============================================================================
// Bounding Box
// =============================================================================

/// Geographic bounding box over a set of points.
///
/// The all-zero box is the designated value for an empty track; callers that
/// care must check emptiness first.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

// =============================================================================
// Track Collection
// =============================================================================

/// An ordered sequence of points with group operations.
///
/// Order is significant: straight out of ingestion it reflects file row
/// order; after [`sort_by_timestamp`](Track::sort_by_timestamp) it is
/// non-decreasing by timestamp. Sorting and deduplication take `&mut self`,
/// so no alias can observe a collection mid-rewrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    points: Vec<Point>,
}

impl Track {
    /// Create an empty track
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of points in the track
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the track contains no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point, preserving insertion order
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// The points in their current order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// First point in current order, if any
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Last point in current order, if any
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Sort points chronologically, in place.
    ///
    /// The sort is stable: points with equal timestamps keep their prior
    /// relative order, so repeated sorting never reshuffles ties.
    pub fn sort_by_timestamp(&mut self) {
        self.points.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    }

    /// Remove points that repeat an earlier point's coordinate key, in place.
    ///
    /// Scans in current order and keeps the first occurrence of each
    /// 6-decimal coordinate key; later points at the same location are
    /// dropped even when their timestamps or metadata differ. This is a
    /// coordinate-only collapse, and it is idempotent.
    pub fn dedup_by_location(&mut self) {
        let mut seen = HashSet::new();
        self.points.retain(|point| seen.insert(point.coordinate_key()));
    }

    /// Bounding box over all points; the all-zero box for an empty track
    pub fn bounds(&self) -> GeoBounds {
        let Some(first) = self.points.first() else {
            return GeoBounds::default();
        };

        let mut bounds = GeoBounds {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lng: first.longitude,
            max_lng: first.longitude,
        };

        for point in &self.points[1..] {
            bounds.min_lat = bounds.min_lat.min(point.latitude);
            bounds.max_lat = bounds.max_lat.max(point.latitude);
            bounds.min_lng = bounds.min_lng.min(point.longitude);
            bounds.max_lng = bounds.max_lng.max(point.longitude);
        }

        bounds
    }

    /// Arithmetic mean of latitudes and longitudes, independently.
    ///
    /// Accurate for geographically compact tracks; not geodesically correct
    /// near the anti-meridian or for near-antipodal spans. (0, 0) for an
    /// empty track.
    pub fn center(&self) -> (f64, f64) {
        if self.points.is_empty() {
            return (0.0, 0.0);
        }

        let mut lat_sum = 0.0;
        let mut lng_sum = 0.0;
        for point in &self.points {
            lat_sum += point.latitude;
            lng_sum += point.longitude;
        }

        let count = self.points.len() as f64;
        (lat_sum / count, lng_sum / count)
    }

    /// Earliest and latest timestamps by linear scan, regardless of current
    /// order. The Unix-epoch instant for both ends of an empty track.
    pub fn time_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let Some(first) = self.points.first() else {
            return (DateTime::<Utc>::default(), DateTime::<Utc>::default());
        };

        let mut start = first.timestamp;
        let mut end = first.timestamp;

        for point in &self.points[1..] {
            if point.timestamp < start {
                start = point.timestamp;
            }
            if point.timestamp > end {
                end = point.timestamp;
            }
        }

        (start, end)
    }

    /// Iterate points in current order
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl From<Vec<Point>> for Track {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl IntoIterator for Track {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
