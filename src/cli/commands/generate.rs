//! Generate command implementation
//!
//! Ingests a track log, sorts it chronologically, and renders the result as
//! a self-contained interactive HTML map.

use colored::Colorize;
use tracing::{debug, info};

use crate::app::services::csv_reader::{CsvReader, ParseStats};
use crate::app::services::map_generator::MapGenerator;
use crate::cli::args::GenerateArgs;
use crate::Result;

/// Generate command runner
pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    debug!("Generate arguments: {:?}", args);

    let format = args.format.csv_format_config();
    format.validate()?;
    let map_config = args.map_config();
    map_config.validate()?;

    let reader = CsvReader::new(format, args.format.processing_config());
    let result = reader.read_file(&args.input)?;

    let mut track = result.track;
    // Ingestion preserves file order; chronological order is this caller's
    // explicit responsibility before anything sequence-dependent.
    track.sort_by_timestamp();

    let (start, end) = track.time_range();
    info!(
        "Loaded {} points from {} ({} to {})",
        track.len(),
        args.input.display(),
        start.format("%Y-%m-%d %H:%M:%S"),
        end.format("%Y-%m-%d %H:%M:%S")
    );

    let generator = MapGenerator::new(map_config);
    generator.generate(&track, &args.output)?;

    print_summary(&result.stats, track.len(), args);
    Ok(())
}

/// Human-readable completion summary
fn print_summary(stats: &ParseStats, point_count: usize, args: &GenerateArgs) {
    println!();
    println!("{}", "Map generated".bold().green());
    println!("  input:   {}", args.input.display());
    println!("  output:  {}", args.output.display());
    println!("  points:  {}", point_count.to_string().bold());

    if stats.rows_skipped > 0 {
        println!(
            "  skipped: {} of {} rows ({:.1}% parsed)",
            stats.rows_skipped.to_string().yellow(),
            stats.total_rows,
            stats.success_rate()
        );
        for skip in &stats.skips {
            println!("    {} row {}: {}", "!".yellow(), skip.row, skip.reason);
        }
    }

    if stats.duplicates_removed > 0 {
        println!("  dedup:   {} duplicate readings removed", stats.duplicates_removed);
    }

    println!();
    println!("Open {} in a browser to view the map", args.output.display());
}
