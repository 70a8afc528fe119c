//! Inspect command implementation for the pyrome processor CLI
//!
//! Parses a single pyrome export file and prints the statistics the
//! converter would derive from it, without writing any output files.
//! Useful for checking a file before running the batch.

use super::shared::setup_logging;
use crate::Result;
use crate::app::services::climatology_parser::ClimatologyParser;
use crate::app::services::{erc_analysis, wind_analysis};
use crate::cli::args::InspectArgs;
use crate::constants::FMS_PERCENTILES;
use colored::Colorize;
use tracing::info;

/// Inspect command runner
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;

    args.validate()?;

    info!("Inspecting {}", args.file.display());
    let climatology = ClimatologyParser::parse_file(&args.file)?;

    println!("{}", format!("{}", args.file.display()).bold());
    println!("  Daily records: {}", climatology.erc.len());
    if let (Some(first), Some(last)) = (climatology.erc.first(), climatology.erc.last()) {
        println!("  Date span:     {} .. {}", first.date, last.date);
    }

    println!();
    println!("{}", "Monthly mean ERC".bold());
    let means = erc_analysis::monthly_means(&climatology.erc);
    for (index, mean) in means.iter().enumerate() {
        match mean {
            Some(mean) => println!("  month {:>2}: {:.2}", index + 1, mean),
            None => println!("  month {:>2}: no records", index + 1),
        }
    }

    if let Some(peak) = erc_analysis::peak_month(&climatology.erc) {
        println!();
        println!(
            "{} month {} (mean ERC {:.2})",
            "Peak-ERC:".bold(),
            peak.month,
            peak.mean_erc
        );

        let wind = wind_analysis::summarize(climatology.wind_for_month(peak.month));
        println!();
        println!("{}", "Peak-month wind".bold());
        println!(
            "  Predominant: {} degrees at {} mph",
            wind.wmod_dir, wind.wmod_spd
        );
        for entry in &wind.by_speed {
            println!(
                "  {:>2} mph: {} degrees ({:.2}%)",
                entry.speed, entry.direction, entry.percentage
            );
        }
    }

    println!();
    println!("{}", "Fuel moisture percentiles".bold());
    for spec in &FMS_PERCENTILES {
        let row = climatology.fuel_moisture.percentile_row(spec.percentile);
        println!(
            "  p{}: FM1 {} / FM10 {} / FM100 {} (bounds {}-{})",
            spec.percentile, row.fm1, row.fm10, row.fm100, spec.low_bound, spec.high_bound
        );
    }

    Ok(())
}
