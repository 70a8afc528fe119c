//! Command-line argument definitions for the pyrome processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the pyrome climatology converter
///
/// Converts pyrome fire-weather climatology exports into FlamMap wind and
/// initial fuel-moisture input files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pyrome-processor",
    version,
    about = "Convert pyrome fire-weather climatology exports into FlamMap input files",
    long_about = "Converts FireFamilyPlus fire-risk export files (one fixed-layout text file \
                  per pyrome zone) into the inputs the FlamMap fire-behavior application \
                  consumes: three per-percentile initial fuel-moisture (.fms) tables and a \
                  peak-ERC-month wind summary CSV per pyrome."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the pyrome processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert pyrome export files into .fms and wind summary outputs (main command)
    Convert(ConvertArgs),
    /// Parse a single pyrome file and print its derived statistics
    Inspect(InspectArgs),
}

/// Arguments for the convert command (batch conversion)
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input directory holding `PY_*.txt` export files
    ///
    /// Defaults to ./data if not specified.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input directory holding PY_*.txt export files"
    )]
    pub input_dir: Option<PathBuf>,

    /// Output directory for generated .fms and CSV files
    ///
    /// Will be created if it doesn't exist. Defaults to ./results.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for generated files"
    )]
    pub output_dir: Option<PathBuf>,

    /// Perform a dry run without actual conversion
    ///
    /// Lists the discovered pyrome manifest and the files that would be
    /// written, without creating any output files.
    #[arg(
        long = "dry-run",
        help = "Show what would be converted without creating output files"
    )]
    pub dry_run: bool,

    /// Force overwrite of existing output files
    ///
    /// Without this flag an existing output file fails that pyrome and the
    /// batch continues with the rest.
    #[arg(long = "force", help = "Force overwrite of existing output files")]
    pub force_overwrite: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (single-file report)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Pyrome export file to inspect
    #[arg(value_name = "FILE", help = "Pyrome export file to inspect")]
    pub file: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_dir) = &self.input_dir {
            if !input_dir.exists() {
                return Err(crate::Error::configuration(format!(
                    "Input directory does not exist: {}",
                    input_dir.display()
                )));
            }

            if !input_dir.is_dir() {
                return Err(crate::Error::configuration(format!(
                    "Input path is not a directory: {}",
                    input_dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.file.exists() {
            return Err(crate::Error::configuration(format!(
                "File does not exist: {}",
                self.file.display()
            )));
        }
        if !self.file.is_file() {
            return Err(crate::Error::configuration(format!(
                "Path is not a file: {}",
                self.file.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input_dir: None,
            output_dir: None,
            dry_run: false,
            force_overwrite: false,
            verbose: 0,
            quiet: false,
        }
    }
}
