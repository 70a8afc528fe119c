//! Command implementations for the pyrome processor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module.

pub mod convert;
pub mod inspect;
pub mod shared;

// Re-export the main types and functions for easy access
pub use shared::{BatchStats, PyromeSource, discover_pyrome_files};

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the pyrome processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `convert`: batch conversion of pyrome exports into FlamMap inputs
/// - `inspect`: single-file parse report without output files
pub fn run(args: Args) -> Result<BatchStats> {
    match args.get_command() {
        Commands::Convert(convert_args) => convert::run_convert(convert_args),
        Commands::Inspect(inspect_args) => {
            inspect::run_inspect(inspect_args)?;
            Ok(BatchStats::default())
        }
    }
}
