//! Parse statistics and result structures
//!
//! Tracks how many rows a batch contained, how many survived validation,
//! and why the rest were skipped. Skip diagnostics are returned to the
//! caller rather than only logged, so recovery behavior is testable
//! without capturing process output.

use crate::app::models::Track;
use serde::{Deserialize, Serialize};

/// Ingestion result: the accumulated track plus batch statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed points, in file row order
    pub track: Track,

    /// Batch statistics and skip diagnostics
    pub stats: ParseStats,
}

/// One recovered row-local failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipDiagnostic {
    /// 1-based absolute file row number
    pub row: usize,

    /// Human-readable reason the row was excluded
    pub reason: String,
}

/// Batch-level parsing statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of data rows encountered (after skip and header handling)
    pub total_rows: usize,

    /// Number of rows successfully converted into points
    pub points_parsed: usize,

    /// Number of rows excluded by row-local failures
    pub rows_skipped: usize,

    /// Number of points removed by coordinate deduplication
    pub duplicates_removed: usize,

    /// Reasons for every skipped row
    pub skips: Vec<SkipDiagnostic>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one skipped row
    pub fn record_skip(&mut self, row: usize, reason: impl Into<String>) {
        self.rows_skipped += 1;
        self.skips.push(SkipDiagnostic {
            row,
            reason: reason.into(),
        });
    }

    /// Fraction of data rows that produced points, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.points_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }
}
