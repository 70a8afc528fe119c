//! Monthly ERC aggregation and peak-month selection
//!
//! The peak-ERC month drives which monthly wind table feeds the summary
//! output: daily average ERC values are grouped by calendar month and the
//! month with the highest mean wins. Ties resolve to the lowest month
//! number, the first strict maximum in month order.

use crate::app::models::DailyErc;
use crate::constants::MONTHS_PER_YEAR;

/// The calendar month with the highest mean daily ERC
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakMonth {
    /// Calendar month, 1..=12
    pub month: u32,

    /// Mean of `erc_avg` over that month's records
    pub mean_erc: f64,
}

/// Mean `erc_avg` per calendar month; `None` for months with no records
pub fn monthly_means(series: &[DailyErc]) -> [Option<f64>; MONTHS_PER_YEAR] {
    let mut sums = [0.0f64; MONTHS_PER_YEAR];
    let mut counts = [0usize; MONTHS_PER_YEAR];

    for record in series {
        let index = (record.month() - 1) as usize;
        sums[index] += record.erc_avg;
        counts[index] += 1;
    }

    let mut means = [None; MONTHS_PER_YEAR];
    for index in 0..MONTHS_PER_YEAR {
        if counts[index] > 0 {
            means[index] = Some(sums[index] / counts[index] as f64);
        }
    }
    means
}

/// Select the month with the highest mean ERC
///
/// Returns `None` for an empty series. Months without records never win.
pub fn peak_month(series: &[DailyErc]) -> Option<PeakMonth> {
    let means = monthly_means(series);

    let mut best: Option<PeakMonth> = None;
    for (index, mean) in means.iter().enumerate() {
        let Some(mean_erc) = *mean else { continue };
        // Strict comparison keeps the lowest month on ties
        if best.is_none_or(|b| mean_erc > b.mean_erc) {
            best = Some(PeakMonth {
                month: index as u32 + 1,
                mean_erc,
            });
        }
    }
    best
}
