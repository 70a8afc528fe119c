//! Application constants for the pyrome processor
//!
//! This module contains the fixed-layout line offsets for FireFamilyPlus
//! fire-risk export files, the percentile/bound pairs for .fms outputs,
//! and the output filename conventions.

// =============================================================================
// Source File Layout
// =============================================================================

/// Line carrying the day count, token 0 (lines 0-2 are free-text metadata)
pub const DAYS_LINE: usize = 3;

/// First line of the daily ERC block
pub const ERC_BLOCK_START: usize = 4;

/// Fuel-moisture percentile table header line, relative to `days`
pub const FMS_HEADER_OFFSET: usize = 5;

/// First fuel-moisture percentile row, relative to `days`
pub const FMS_BLOCK_OFFSET: usize = 6;

/// Number of percentile rows (percentiles 1..=100)
pub const FMS_ROW_COUNT: usize = 100;

/// Wind table header line, relative to `days`
pub const WIND_HEADER_OFFSET: usize = 117;

/// First line of the January wind block, relative to `days`
pub const WIND_BLOCKS_OFFSET: usize = 118;

/// Lines per monthly wind block (6 data rows plus 3 trailing rows)
pub const WIND_BLOCK_LINES: usize = 9;

/// Speed-indexed data rows per monthly wind block
pub const WIND_TABLE_ROWS: usize = 6;

/// Wind direction columns (multiples of 45 degrees)
pub const WIND_DIRECTION_COUNT: usize = 8;

/// Monthly wind blocks per file
pub const MONTHS_PER_YEAR: usize = 12;

/// Wind speed bins, in table row order (mph)
pub const WIND_SPEEDS: [u32; WIND_TABLE_ROWS] = [5, 10, 15, 20, 25, 30];

/// Date format of the daily ERC record date column
pub const ERC_DATE_FORMAT: &str = "%m/%d/%Y";

/// Name of the wind table speed column
pub const WIND_SPEED_COLUMN: &str = "speed";

/// Fuel-moisture component columns carried into .fms outputs
pub const FM_COLUMNS: [&str; 3] = ["FM1", "FM10", "FM100"];

// =============================================================================
// Output Products
// =============================================================================

/// Number of fuel types enumerated in each .fms output
pub const FUEL_TYPE_COUNT: u32 = 256;

/// One .fms output product: a dryness percentile with its fixed
/// (low, high) bound pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentileSpec {
    pub percentile: u32,
    pub low_bound: u32,
    pub high_bound: u32,
}

/// The three .fms products emitted per pyrome file
pub const FMS_PERCENTILES: [PercentileSpec; 3] = [
    PercentileSpec {
        percentile: 80,
        low_bound: 90,
        high_bound: 110,
    },
    PercentileSpec {
        percentile: 90,
        low_bound: 60,
        high_bound: 80,
    },
    PercentileSpec {
        percentile: 97,
        low_bound: 40,
        high_bound: 60,
    },
];

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Pattern matching pyrome input filenames, capturing the pyrome id
pub const INPUT_FILE_PATTERN: &str = r"^PY_(\d+)\.txt$";

/// Default input directory when none is given on the command line
pub const DEFAULT_INPUT_DIR: &str = "data";

/// Default output directory when none is given on the command line
pub const DEFAULT_OUTPUT_DIR: &str = "results";

// =============================================================================
// Helper Functions
// =============================================================================

/// Get the .fms output filename for an input file and percentile
pub fn fms_output_filename(input_file_name: &str, percentile: u32) -> String {
    format!("{}_fms{}.fms", input_file_name, percentile)
}

/// Get the wind summary CSV filename for an input file
pub fn summary_output_filename(input_file_name: &str) -> String {
    format!("{}_ercmax_wdir.csv", input_file_name)
}

/// Get the .fms header label for a percentile
pub fn fms_header_label(percentile: u32) -> String {
    format!("{}th percentile pyrome", percentile)
}
