use clap::Parser;
use geotrace::cli::{args::Args, commands};
use std::process;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Set up logging; --verbose raises the level to debug
    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {error}");

            // Surface the cause chain for diagnostics
            let mut source = std::error::Error::source(&error);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }

            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Geotrace - GPS Track Normalizer");
    println!("===============================");
    println!();
    println!("Normalize GPS track logs from loosely-structured CSV files into clean,");
    println!("chronologically ordered point sequences and interactive HTML maps.");
    println!();
    println!("USAGE:");
    println!("    geotrace <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    generate    Ingest a track log and generate an interactive HTML map");
    println!("    inspect     Ingest a track log and report what was found");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Enable verbose logging");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Generate a map from a CSV with a standard header:");
    println!("    geotrace generate --input walk.csv --output walk.html --title \"Morning Walk\"");
    println!();
    println!("    # Headerless file with metadata lines on top, removing duplicates:");
    println!("    geotrace generate --input log.csv --no-header --skip-rows 2 --dedup");
    println!();
    println!("    # Inspect a file with a custom timestamp format, as JSON:");
    println!("    geotrace inspect --input log.csv --timestamp-format \"%d.%m.%Y %H:%M\" --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    geotrace <COMMAND> --help");
}
