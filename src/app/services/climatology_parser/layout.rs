//! Declarative line layout for pyrome climatology export files
//!
//! Every block position in a fire-risk export is a pure function of the
//! day count on the header line. [`FileLayout`] names those blocks once so
//! no literal offsets leak into the parsing logic.

use crate::constants::{
    DAYS_LINE, ERC_BLOCK_START, FMS_BLOCK_OFFSET, FMS_HEADER_OFFSET, FMS_ROW_COUNT,
    MONTHS_PER_YEAR, WIND_BLOCK_LINES, WIND_BLOCKS_OFFSET, WIND_HEADER_OFFSET, WIND_TABLE_ROWS,
};

/// A contiguous run of lines within the source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBlock {
    /// 0-based index of the first line
    pub start: usize,

    /// Number of lines in the block
    pub len: usize,
}

impl LineBlock {
    /// Exclusive end line of the block
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Whether this block shares any line with another
    pub fn overlaps(&self, other: &LineBlock) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// Named block offsets for one file, computed from its day count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileLayout {
    days: usize,
}

impl FileLayout {
    /// Build the layout for a file declaring `days` daily records
    pub fn new(days: usize) -> Self {
        Self { days }
    }

    /// Line carrying the day count token
    pub fn days_line() -> usize {
        DAYS_LINE
    }

    /// Daily ERC record block
    pub fn erc_block(&self) -> LineBlock {
        LineBlock {
            start: ERC_BLOCK_START,
            len: self.days,
        }
    }

    /// Fuel-moisture percentile table column header line
    pub fn fms_header_line(&self) -> usize {
        self.days + FMS_HEADER_OFFSET
    }

    /// Fuel-moisture percentile table rows (percentiles 1..=100)
    pub fn fms_block(&self) -> LineBlock {
        LineBlock {
            start: self.days + FMS_BLOCK_OFFSET,
            len: FMS_ROW_COUNT,
        }
    }

    /// Wind table column header line
    pub fn wind_header_line(&self) -> usize {
        self.days + WIND_HEADER_OFFSET
    }

    /// Speed-indexed wind rows for a calendar month (1..=12)
    pub fn wind_block(&self, month: u32) -> LineBlock {
        LineBlock {
            start: self.days + WIND_BLOCKS_OFFSET + WIND_BLOCK_LINES * (month as usize - 1),
            len: WIND_TABLE_ROWS,
        }
    }

    /// Minimum line count a file must have for every block to be readable
    pub fn required_line_count(&self) -> usize {
        self.wind_block(MONTHS_PER_YEAR as u32).end()
    }
}
