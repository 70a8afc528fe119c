//! Line-oriented parsing of pyrome climatology export files
//!
//! The parser walks the named blocks of a [`FileLayout`] and converts each
//! into its domain type. All positional knowledge lives in the layout; this
//! module only tokenizes lines and validates field values.

use super::layout::FileLayout;
use crate::app::models::{
    DailyErc, FuelMoistureRow, FuelMoistureTable, PyromeClimatology, WindRow, WindTable,
};
use crate::constants::{
    ERC_DATE_FORMAT, FM_COLUMNS, MONTHS_PER_YEAR, WIND_DIRECTION_COUNT, WIND_SPEED_COLUMN,
    WIND_SPEEDS,
};
use crate::{Error, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parser for FireFamilyPlus fire-risk export files
pub struct ClimatologyParser;

impl ClimatologyParser {
    /// Read and parse one pyrome climatology file
    pub fn parse_file(path: &Path) -> Result<PyromeClimatology> {
        let file = path.display().to_string();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read '{}'", file), e))?;
        let lines: Vec<&str> = content.lines().collect();
        Self::parse_lines(&lines, &file)
    }

    /// Parse an already-read file body; `file` labels error messages
    pub fn parse_lines(lines: &[&str], file: &str) -> Result<PyromeClimatology> {
        let days = Self::parse_day_count(lines, file)?;
        let layout = FileLayout::new(days);

        let needed = layout.required_line_count();
        if lines.len() < needed {
            return Err(Error::short_file(file, needed, lines.len()));
        }

        let erc = Self::parse_erc_block(lines, &layout, file)?;
        let fuel_moisture = Self::parse_fuel_moisture(lines, &layout, file)?;
        let wind_by_month = Self::parse_wind_tables(lines, &layout, file)?;

        debug!(
            "Parsed '{}': {} daily records, {} percentile rows, {} wind months",
            file,
            erc.len(),
            fuel_moisture.len(),
            wind_by_month.len()
        );

        Ok(PyromeClimatology {
            days,
            erc,
            fuel_moisture,
            wind_by_month,
        })
    }

    /// Extract the day count token from the fixed header line
    fn parse_day_count(lines: &[&str], file: &str) -> Result<usize> {
        let line_no = FileLayout::days_line();
        let line = lines
            .get(line_no)
            .ok_or_else(|| Error::short_file(file, line_no + 1, lines.len()))?;

        let token = line
            .split_whitespace()
            .next()
            .ok_or_else(|| Error::malformed_header(file, "day count line is empty"))?;

        token.parse::<usize>().map_err(|_| {
            Error::malformed_header(file, format!("day count token '{}' is not an integer", token))
        })
    }

    /// Parse the daily ERC block: average ERC plus calendar date per row
    fn parse_erc_block(lines: &[&str], layout: &FileLayout, file: &str) -> Result<Vec<DailyErc>> {
        let block = layout.erc_block();
        let mut records = Vec::with_capacity(block.len);

        for (offset, line) in lines[block.start..block.end()].iter().enumerate() {
            let line_no = block.start + offset;
            let tokens: Vec<&str> = line.split_whitespace().collect();

            let erc_token = tokens.first().ok_or_else(|| {
                Error::malformed_header(file, format!("daily record at line {} is empty", line_no))
            })?;
            let erc_avg = erc_token
                .parse::<f64>()
                .map_err(|_| Error::non_numeric_field(file, "erc_avg", *erc_token))?;

            let date_token = tokens.get(3).ok_or_else(|| {
                Error::date_parse(
                    file,
                    format!("daily record at line {} has no date column", line_no),
                )
            })?;
            let date = NaiveDate::parse_from_str(date_token, ERC_DATE_FORMAT).map_err(|e| {
                Error::date_parse(
                    file,
                    format!("'{}' at line {}: {}", date_token, line_no, e),
                )
            })?;

            records.push(DailyErc { erc_avg, date });
        }

        Ok(records)
    }

    /// Parse the 100-row fuel-moisture percentile table, selecting the
    /// FM1/FM10/FM100 columns by header name
    fn parse_fuel_moisture(
        lines: &[&str],
        layout: &FileLayout,
        file: &str,
    ) -> Result<FuelMoistureTable> {
        let header: Vec<&str> = lines[layout.fms_header_line()].split_whitespace().collect();

        let mut column_indices = [0usize; 3];
        for (i, column) in FM_COLUMNS.iter().enumerate() {
            column_indices[i] = header
                .iter()
                .position(|token| token == column)
                .ok_or_else(|| Error::missing_column(file, *column))?;
        }

        let block = layout.fms_block();
        let mut rows = Vec::with_capacity(block.len);

        for (offset, line) in lines[block.start..block.end()].iter().enumerate() {
            let line_no = block.start + offset;
            let tokens: Vec<&str> = line.split_whitespace().collect();

            let mut values = [0.0f64; 3];
            for (i, &index) in column_indices.iter().enumerate() {
                let token = tokens.get(index).ok_or_else(|| {
                    Error::malformed_header(
                        file,
                        format!(
                            "percentile row at line {} has {} columns, expected at least {}",
                            line_no,
                            tokens.len(),
                            index + 1
                        ),
                    )
                })?;
                values[i] = token
                    .parse::<f64>()
                    .map_err(|_| Error::non_numeric_field(file, FM_COLUMNS[i], *token))?;
            }

            rows.push(FuelMoistureRow {
                fm1: values[0],
                fm10: values[1],
                fm100: values[2],
            });
        }

        Ok(FuelMoistureTable::new(rows))
    }

    /// Parse all twelve monthly wind tables
    fn parse_wind_tables(
        lines: &[&str],
        layout: &FileLayout,
        file: &str,
    ) -> Result<Vec<WindTable>> {
        let header: Vec<&str> = lines[layout.wind_header_line()]
            .split_whitespace()
            .collect();

        let speed_index = header
            .iter()
            .position(|token| token.eq_ignore_ascii_case(WIND_SPEED_COLUMN))
            .ok_or_else(|| Error::missing_column(file, WIND_SPEED_COLUMN))?;

        let mut directions = Vec::with_capacity(WIND_DIRECTION_COUNT);
        for (index, token) in header.iter().enumerate() {
            if index == speed_index {
                continue;
            }
            let degrees = token
                .parse::<f64>()
                .map_err(|_| Error::non_numeric_field(file, "wind direction", *token))?;
            directions.push(degrees.round() as i32);
        }
        if directions.len() != WIND_DIRECTION_COUNT {
            return Err(Error::malformed_header(
                file,
                format!(
                    "wind header has {} direction columns, expected {}",
                    directions.len(),
                    WIND_DIRECTION_COUNT
                ),
            ));
        }

        let mut tables = Vec::with_capacity(MONTHS_PER_YEAR);
        for month in 1..=MONTHS_PER_YEAR as u32 {
            let block = layout.wind_block(month);
            let mut rows = Vec::with_capacity(block.len);

            for (offset, line) in lines[block.start..block.end()].iter().enumerate() {
                let line_no = block.start + offset;
                let tokens: Vec<&str> = line.split_whitespace().collect();

                if tokens.len() != header.len() {
                    return Err(Error::malformed_header(
                        file,
                        format!(
                            "wind row at line {} has {} columns, expected {}",
                            line_no,
                            tokens.len(),
                            header.len()
                        ),
                    ));
                }

                let speed_token = tokens[speed_index];
                let speed = speed_token
                    .parse::<u32>()
                    .map_err(|_| Error::non_numeric_field(file, WIND_SPEED_COLUMN, speed_token))?;
                if speed != WIND_SPEEDS[offset] {
                    return Err(Error::malformed_header(
                        file,
                        format!(
                            "wind row at line {} has speed bin {}, expected {}",
                            line_no, speed, WIND_SPEEDS[offset]
                        ),
                    ));
                }

                let mut values = Vec::with_capacity(directions.len());
                for (index, token) in tokens.iter().enumerate() {
                    if index == speed_index {
                        continue;
                    }
                    let value = token
                        .parse::<f64>()
                        .map_err(|_| Error::non_numeric_field(file, "wind frequency", *token))?;
                    values.push(value);
                }

                rows.push(WindRow { speed, values });
            }

            tables.push(WindTable {
                directions: directions.clone(),
                rows,
            });
        }

        Ok(tables)
    }
}
