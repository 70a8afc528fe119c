//! Pyrome Processor Library
//!
//! A Rust library for converting pyrome fire-weather climatology exports
//! (FireFamilyPlus fire-risk text files, one per pyrome zone) into input
//! files for the FlamMap fire-behavior modeling application.
//!
//! This library provides tools for:
//! - Parsing fixed-layout climatology files through a declarative layout descriptor
//! - Deriving per-percentile initial fuel-moisture (.fms) tables
//! - Selecting the peak-ERC month and summarizing its wind distribution
//! - Writing tab-separated .fms files and a wind summary CSV atomically
//! - Per-file error isolation so one bad pyrome never blocks the batch

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod climatology_parser;
        pub mod erc_analysis;
        pub mod fms_writer;
        pub mod summary_writer;
        pub mod wind_analysis;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DailyErc, PyromeClimatology, SummaryRecord, WindSummary};
pub use config::Config;

/// Result type alias for the pyrome processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for pyrome processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The fixed header section could not be interpreted
    #[error("Malformed header in '{file}': {message}")]
    MalformedHeader { file: String, message: String },

    /// The file has fewer lines than the layout requires
    #[error("File '{file}' too short: layout requires {needed} lines, found {actual}")]
    ShortFile {
        file: String,
        needed: usize,
        actual: usize,
    },

    /// A field expected to parse as a number did not
    #[error("Non-numeric value '{value}' for field '{field}' in '{file}'")]
    NonNumericField {
        file: String,
        field: String,
        value: String,
    },

    /// A date token was not in month/day/year form
    #[error("Date parse failure in '{file}': {message}")]
    DateParse { file: String, message: String },

    /// A named column was absent from a table header line
    #[error("Column '{column}' not found in '{file}'")]
    MissingColumn { file: String, column: String },

    /// CSV/TSV output writing error
    #[error("Output writing error: {message}")]
    CsvWriting {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Input manifest discovery error
    #[error("Input discovery error: {message}")]
    Discovery { message: String },

    /// An output file already exists and overwriting was not requested
    #[error("Output file already exists: {path} (use --force to overwrite)")]
    OutputExists { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed header error
    pub fn malformed_header(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a short file error
    pub fn short_file(file: impl Into<String>, needed: usize, actual: usize) -> Self {
        Self::ShortFile {
            file: file.into(),
            needed,
            actual,
        }
    }

    /// Create a non-numeric field error
    pub fn non_numeric_field(
        file: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::NonNumericField {
            file: file.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a date parse error
    pub fn date_parse(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DateParse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create a CSV writing error with context
    pub fn csv_writing(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvWriting {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an input discovery error
    pub fn discovery(message: impl Into<String>) -> Self {
        Self::Discovery {
            message: message.into(),
        }
    }

    /// Create an output-exists error
    pub fn output_exists(path: impl Into<String>) -> Self {
        Self::OutputExists { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvWriting {
            message: "CSV writing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(error: tempfile::PersistError) -> Self {
        Self::Io {
            message: "Failed to persist temporary output file".to_string(),
            source: error.error,
        }
    }
}
