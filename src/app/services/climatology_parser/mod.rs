//! Fixed-layout parser for pyrome climatology export files
//!
//! FireFamilyPlus fire-risk exports are rigid line-positional text files:
//! every block's position is a function of the day count declared on a
//! fixed header line. The parser expresses that schema once, as a
//! declarative layout descriptor, and feeds it to a single line-oriented
//! reader.
//!
//! ## Architecture
//!
//! - [`layout`] - Named block offsets computed from the day count
//! - [`parser`] - Line-oriented parsing into [`crate::app::models::PyromeClimatology`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pyrome_processor::app::services::climatology_parser::ClimatologyParser;
//!
//! # fn example() -> pyrome_processor::Result<()> {
//! let climatology = ClimatologyParser::parse_file(std::path::Path::new("PY_001.txt"))?;
//! println!("{} daily records", climatology.erc.len());
//! # Ok(())
//! # }
//! ```

pub mod layout;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use layout::{FileLayout, LineBlock};
pub use parser::ClimatologyParser;
