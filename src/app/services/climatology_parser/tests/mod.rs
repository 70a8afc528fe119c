//! Test fixtures for climatology parser testing
//!
//! Builds synthetic fire-risk export bodies whose block positions follow the
//! documented layout, so tests control every value the parser extracts.


/// Number of filler lines between the percentile block and the wind header
const GAP_LINES: usize = 11;

/// Build a synthetic export body.
///
/// One daily ERC row is emitted per `(erc_avg, date)` pair, so the day count
/// equals `erc.len()`. Percentile row `p` carries FM1/FM10/FM100 values of
/// `p/10`, `(p+1)/10`, `(p+2)/10`. Wind cells come from
/// `wind_cell(month, row, col)` with month 1..=12, row 0..6, col 0..8.
pub fn build_export(
    erc: &[(f64, &str)],
    wind_cell: impl Fn(u32, usize, usize) -> f64,
) -> Vec<String> {
    let days = erc.len();
    let mut lines = Vec::new();

    // Free-text metadata header (lines 0-2), then the day count line
    lines.push("FireFamilyPlus Fire Risk Export".to_string());
    lines.push("Pyrome test fixture".to_string());
    lines.push("ERC NFDRS 16Y".to_string());
    lines.push(format!("{} 2020", days));

    // Daily ERC block
    for (erc_avg, date) in erc {
        lines.push(format!("{} 4.50 10.2 {} 12.0 13.0", erc_avg, date));
    }

    // Filler line, then the percentile table header and its 100 rows
    lines.push("-- fuel moisture percentiles --".to_string());
    lines.push("Percentile FM1 FM10 FM100 FM1000 FMHerb".to_string());
    for p in 1..=100u32 {
        lines.push(format!(
            "{} {} {} {} 20.0 30.0",
            p,
            p as f64 / 10.0,
            (p + 1) as f64 / 10.0,
            (p + 2) as f64 / 10.0
        ));
    }

    // Filler between the percentile block and the wind header
    for _ in 0..GAP_LINES {
        lines.push("--".to_string());
    }

    // Wind header and twelve 9-line month blocks
    lines.push("speed 0 45 90 135 180 225 270 315".to_string());
    for month in 1..=12u32 {
        for (row, speed) in [5u32, 10, 15, 20, 25, 30].iter().enumerate() {
            let cells: Vec<String> = (0..8)
                .map(|col| format!("{}", wind_cell(month, row, col)))
                .collect();
            lines.push(format!("{} {}", speed, cells.join(" ")));
        }
        lines.push(format!("calm {}", month));
        lines.push("total 100.0".to_string());
        lines.push(String::new());
    }

    assert_eq!(lines.len(), days + 226);
    lines
}

/// Twelve-day series, one day per month, with July carrying the highest ERC
pub fn default_erc() -> Vec<(f64, String)> {
    (1..=12u32)
        .map(|month| {
            let avg = if month == 7 { 30.0 } else { 10.0 + month as f64 };
            (avg, format!("{:02}/15/2020", month))
        })
        .collect()
}

/// Borrow an owned `(f64, String)` series as the slice shape `build_export` takes
pub fn as_refs(erc: &[(f64, String)]) -> Vec<(f64, &str)> {
    erc.iter().map(|(avg, date)| (*avg, date.as_str())).collect()
}
