//! Command implementations for the geotrace CLI
//!
//! Each subcommand lives in its own module; this module dispatches to the
//! right handler based on the parsed arguments.

pub mod generate;
pub mod inspect;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner for geotrace
///
/// Dispatches to the subcommand handlers:
/// - `generate`: ingest a track log and write an interactive HTML map
/// - `inspect`: ingest a track log and report what was found
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Generate(generate_args)) => generate::run_generate(&generate_args),
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(&inspect_args),
        None => Err(Error::configuration("no command provided")),
    }
}
