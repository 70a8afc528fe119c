//! Data models for pyrome climatology processing
//!
//! This module contains the core data structures representing one parsed
//! pyrome climatology file and the derived wind/fuel-moisture products.

use crate::constants::{FMS_ROW_COUNT, WIND_SPEEDS, WIND_TABLE_ROWS};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// =============================================================================
// Parsed Source Data
// =============================================================================

/// One daily energy release component record
#[derive(Debug, Clone, PartialEq)]
pub struct DailyErc {
    /// Historical average ERC for this calendar day
    pub erc_avg: f64,

    /// Calendar date of the record
    pub date: NaiveDate,
}

impl DailyErc {
    /// Calendar month of the record (1..=12)
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// Fuel-moisture components for one dryness percentile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelMoistureRow {
    /// 1-hour fuel moisture (percent)
    pub fm1: f64,

    /// 10-hour fuel moisture (percent)
    pub fm10: f64,

    /// 100-hour fuel moisture (percent)
    pub fm100: f64,
}

/// The 100-row fuel-moisture percentile table (percentiles 1..=100)
#[derive(Debug, Clone, PartialEq)]
pub struct FuelMoistureTable {
    rows: Vec<FuelMoistureRow>,
}

impl FuelMoistureTable {
    /// Wrap a parsed table; the parser guarantees exactly 100 rows
    pub fn new(rows: Vec<FuelMoistureRow>) -> Self {
        debug_assert_eq!(rows.len(), FMS_ROW_COUNT);
        Self { rows }
    }

    /// Row for a 1-based percentile (percentile p lives at row p - 1)
    pub fn percentile_row(&self, percentile: u32) -> &FuelMoistureRow {
        &self.rows[(percentile - 1) as usize]
    }

    /// Number of percentile rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One speed-indexed row of a monthly wind table
#[derive(Debug, Clone, PartialEq)]
pub struct WindRow {
    /// Wind speed bin (mph)
    pub speed: u32,

    /// Frequency percentage per direction, in header column order
    pub values: Vec<f64>,
}

/// Wind frequency distribution for one month: rows by speed bin,
/// columns by direction
#[derive(Debug, Clone, PartialEq)]
pub struct WindTable {
    /// Direction column labels in degrees, in header order
    pub directions: Vec<i32>,

    /// Speed-indexed rows in source order (speeds 5..=30)
    pub rows: Vec<WindRow>,
}

/// One fully parsed pyrome climatology file
#[derive(Debug, Clone, PartialEq)]
pub struct PyromeClimatology {
    /// Number of daily climate records declared in the header
    pub days: usize,

    /// Daily ERC series, `days` consecutive records
    pub erc: Vec<DailyErc>,

    /// Fuel-moisture percentile table
    pub fuel_moisture: FuelMoistureTable,

    /// Monthly wind tables, January through December
    pub wind_by_month: Vec<WindTable>,
}

impl PyromeClimatology {
    /// Wind table for a calendar month (1..=12)
    pub fn wind_for_month(&self, month: u32) -> &WindTable {
        &self.wind_by_month[(month - 1) as usize]
    }
}

// =============================================================================
// Derived Products
// =============================================================================

/// Predominant direction for one wind speed bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedDirection {
    /// Wind speed bin (mph)
    pub speed: u32,

    /// Direction with the highest frequency at this speed (degrees)
    pub direction: i32,

    /// That direction's frequency percentage
    pub percentage: f64,
}

/// Wind statistics derived from one monthly wind table
#[derive(Debug, Clone, PartialEq)]
pub struct WindSummary {
    /// Direction of the single most frequent (direction, speed) cell
    pub wmod_dir: i32,

    /// Speed of the single most frequent (direction, speed) cell
    pub wmod_spd: u32,

    /// Per-speed predominant directions, in speed bin order
    pub by_speed: Vec<SpeedDirection>,
}

impl WindSummary {
    /// Predominant direction entry for a speed bin, if present
    pub fn for_speed(&self, speed: u32) -> Option<&SpeedDirection> {
        self.by_speed.iter().find(|s| s.speed == speed)
    }
}

/// One row of the `_ercmax_wdir.csv` summary output
///
/// Field names double as the CSV header, so they match the published
/// column contract exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub pyrome_id: u32,
    pub ercmax: f64,
    pub ercmax_month: u32,
    pub wmod_dir: i32,
    pub wmod_spd: u32,
    pub wdir5: i32,
    pub wdir10: i32,
    pub wdir15: i32,
    pub wdir20: i32,
    pub wdir25: i32,
    pub wdir30: i32,
    pub wdirpc5: f64,
    pub wdirpc10: f64,
    pub wdirpc15: f64,
    pub wdirpc20: f64,
    pub wdirpc25: f64,
    pub wdirpc30: f64,
}

impl SummaryRecord {
    /// Assemble the summary row from the peak month statistics and wind summary
    ///
    /// The wind summary always carries one entry per standard speed bin,
    /// in bin order; the parser enforces the six-row table shape.
    pub fn new(pyrome_id: u32, ercmax: f64, ercmax_month: u32, wind: &WindSummary) -> Self {
        debug_assert_eq!(wind.by_speed.len(), WIND_TABLE_ROWS);
        let dir = |i: usize| wind.by_speed[i].direction;
        let pc = |i: usize| wind.by_speed[i].percentage;
        debug_assert!(
            wind.by_speed
                .iter()
                .map(|s| s.speed)
                .eq(WIND_SPEEDS.iter().copied())
        );

        Self {
            pyrome_id,
            ercmax,
            ercmax_month,
            wmod_dir: wind.wmod_dir,
            wmod_spd: wind.wmod_spd,
            wdir5: dir(0),
            wdir10: dir(1),
            wdir15: dir(2),
            wdir20: dir(3),
            wdir25: dir(4),
            wdir30: dir(5),
            wdirpc5: pc(0),
            wdirpc10: pc(1),
            wdirpc15: pc(2),
            wdirpc20: pc(3),
            wdirpc25: pc(4),
            wdirpc30: pc(5),
        }
    }
}
