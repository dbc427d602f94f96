//! Inspect command implementation
//!
//! Ingests a track log and reports what was found — point count, bounding
//! box, centroid, time span, and every skipped row — as human-readable text
//! or JSON.

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use crate::app::models::GeoBounds;
use crate::app::services::csv_reader::{CsvReader, SkipDiagnostic};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::{Error, Result};

/// Machine-readable inspection report
#[derive(Debug, Serialize)]
struct InspectReport {
    source: String,
    point_count: usize,
    rows_total: usize,
    rows_skipped: usize,
    duplicates_removed: usize,
    bounds: GeoBounds,
    center: (f64, f64),
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    skips: Vec<SkipDiagnostic>,
}

/// Inspect command runner
pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    debug!("Inspect arguments: {:?}", args);

    let format = args.layout.csv_format_config();
    format.validate()?;

    let reader = CsvReader::new(format, args.layout.processing_config());
    let result = reader.read_file(&args.input)?;

    let mut track = result.track;
    track.sort_by_timestamp();

    let (start, end) = track.time_range();
    let report = InspectReport {
        source: args.input.display().to_string(),
        point_count: track.len(),
        rows_total: result.stats.total_rows,
        rows_skipped: result.stats.rows_skipped,
        duplicates_removed: result.stats.duplicates_removed,
        bounds: track.bounds(),
        center: track.center(),
        start,
        end,
        skips: result.stats.skips,
    };

    match args.format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => print_json_report(&report)?,
    }

    Ok(())
}

/// Human-readable report
fn print_text_report(report: &InspectReport) {
    println!();
    println!("{}", format!("Track summary: {}", report.source).bold());
    println!("  points:     {}", report.point_count);
    println!(
        "  time range: {} to {}",
        report.start.format("%Y-%m-%d %H:%M:%S"),
        report.end.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "  bounds:     lat [{:.6}, {:.6}], lng [{:.6}, {:.6}]",
        report.bounds.min_lat, report.bounds.max_lat, report.bounds.min_lng, report.bounds.max_lng
    );
    println!(
        "  center:     {:.6}, {:.6}",
        report.center.0, report.center.1
    );

    if report.duplicates_removed > 0 {
        println!("  dedup:      {} duplicate readings removed", report.duplicates_removed);
    }

    if report.rows_skipped > 0 {
        println!(
            "  skipped:    {} of {} rows",
            report.rows_skipped.to_string().yellow(),
            report.rows_total
        );
        for skip in &report.skips {
            println!("    {} row {}: {}", "!".yellow(), skip.row, skip.reason);
        }
    } else {
        println!("  skipped:    0 rows");
    }
}

/// JSON report on stdout
fn print_json_report(report: &InspectReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| Error::configuration(format!("cannot serialize report: {e}")))?;
    println!("{json}");
    Ok(())
}
