//! Predominant wind direction/speed extraction from a monthly wind table
//!
//! Two reductions over the 6x8 speed-by-direction frequency table:
//! the per-speed argmax direction, and the single most frequent
//! (direction, speed) cell. All argmax scans use strict comparison, so
//! ties resolve to the first cell in table iteration order (leftmost
//! column, then topmost row).

use crate::app::models::{SpeedDirection, WindSummary, WindTable};

/// Derive the wind summary for one monthly table
pub fn summarize(table: &WindTable) -> WindSummary {
    let mut by_speed = Vec::with_capacity(table.rows.len());
    let mut wmod_dir = table.directions.first().copied().unwrap_or(0);
    let mut wmod_spd = table.rows.first().map(|r| r.speed).unwrap_or(0);
    let mut overall_max = f64::NEG_INFINITY;

    for row in &table.rows {
        let mut best_column = 0usize;
        let mut best_value = f64::NEG_INFINITY;

        for (column, &value) in row.values.iter().enumerate() {
            if value > best_value {
                best_column = column;
                best_value = value;
            }
            if value > overall_max {
                overall_max = value;
                wmod_dir = table.directions[column];
                wmod_spd = row.speed;
            }
        }

        by_speed.push(SpeedDirection {
            speed: row.speed,
            direction: table.directions[best_column],
            percentage: best_value,
        });
    }

    WindSummary {
        wmod_dir,
        wmod_spd,
        by_speed,
    }
}
