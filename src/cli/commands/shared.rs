//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations: logging setup, input manifest
//! discovery, batch statistics, and progress bar styling.

use crate::constants::INPUT_FILE_PATTERN;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// One unit of work in the conversion batch: a pyrome id and its source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyromeSource {
    /// 1-based pyrome zone id, taken from the filename
    pub pyrome_id: u32,

    /// Path to the export file
    pub path: PathBuf,
}

impl PyromeSource {
    /// The source file's name, carried into output filenames
    pub fn file_name(&self) -> Result<&str> {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                Error::discovery(format!("Unreadable file name: {}", self.path.display()))
            })
    }
}

/// Batch statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    /// Number of pyrome files discovered
    pub files_discovered: usize,
    /// Number of pyrome files fully converted
    pub files_converted: usize,
    /// Number of pyrome files that failed
    pub files_failed: usize,
    /// Number of output files written
    pub outputs_written: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Failed pyromes with their error descriptions
    pub failures: Vec<(u32, String)>,
}

/// Set up structured logging to stderr
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pyrome_processor={}", log_level)));

    // Set up subscriber based on output format preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Discover the input manifest: `PY_<id>.txt` files in the input directory,
/// sorted by pyrome id
pub fn discover_pyrome_files(input_dir: &Path) -> Result<Vec<PyromeSource>> {
    let pattern = Regex::new(INPUT_FILE_PATTERN)
        .map_err(|e| Error::discovery(format!("Invalid input file pattern: {}", e)))?;

    let mut sources = Vec::new();

    for entry in WalkDir::new(input_dir)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if let Some(captures) = pattern.captures(name) {
            let pyrome_id: u32 = captures[1].parse().map_err(|_| {
                Error::discovery(format!("Pyrome id out of range in file name '{}'", name))
            })?;
            sources.push(PyromeSource {
                pyrome_id,
                path: path.to_path_buf(),
            });
        }
    }

    // Sort by id for deterministic batch order
    sources.sort_by_key(|s| s.pyrome_id);

    for window in sources.windows(2) {
        if window[0].pyrome_id == window[1].pyrome_id {
            return Err(Error::discovery(format!(
                "Duplicate pyrome id {}: '{}' and '{}'",
                window[0].pyrome_id,
                window[0].path.display(),
                window[1].path.display()
            )));
        }
    }

    debug!(
        "Discovered {} pyrome files in {}",
        sources.len(),
        input_dir.display()
    );
    for source in &sources {
        debug!(
            "  Found pyrome {}: {}",
            source.pyrome_id,
            source.path.display()
        );
    }

    Ok(sources)
}

/// Check if an error is critical enough to stop the batch
pub fn is_critical_error(error: &Error) -> bool {
    matches!(error, Error::Configuration { .. } | Error::Discovery { .. })
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
