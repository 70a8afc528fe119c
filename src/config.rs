//! Configuration management and validation.
//!
//! Provides the runtime configuration for a conversion batch: where the
//! pyrome export files live, where the derived products go, and the
//! overwrite/dry-run policy. Assembled from defaults plus CLI overrides.

use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Runtime configuration for a conversion batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the `PY_*.txt` export files
    pub input_dir: PathBuf,

    /// Directory receiving the .fms and summary CSV products
    pub output_dir: PathBuf,

    /// Overwrite existing output files instead of failing the pyrome
    pub force_overwrite: bool,

    /// Report what would be written without creating any files
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            force_overwrite: false,
            dry_run: false,
        }
    }
}

impl Config {
    /// Assemble a configuration from defaults plus explicit overrides
    pub fn new(
        input_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        force_overwrite: bool,
        dry_run: bool,
    ) -> Self {
        let defaults = Self::default();
        Self {
            input_dir: input_dir.unwrap_or(defaults.input_dir),
            output_dir: output_dir.unwrap_or(defaults.output_dir),
            force_overwrite,
            dry_run,
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.exists() {
            return Err(Error::configuration(format!(
                "Input directory does not exist: {}",
                self.input_dir.display()
            )));
        }

        if !self.input_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is not a directory: {}",
                self.input_dir.display()
            )));
        }

        Ok(())
    }

    /// Create the output directory if it does not exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        if !self.output_dir.exists() {
            std::fs::create_dir_all(&self.output_dir).map_err(|e| {
                Error::configuration(format!(
                    "Failed to create output directory '{}': {}",
                    self.output_dir.display(),
                    e
                ))
            })?;
            debug!("Created output directory: {}", self.output_dir.display());
        }
        Ok(())
    }
}
