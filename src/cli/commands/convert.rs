//! Convert command implementation for the pyrome processor CLI
//!
//! This module contains the complete batch conversion workflow: manifest
//! discovery, per-pyrome conversion with failure isolation, progress
//! reporting, and the final summary report.

use super::shared::{
    BatchStats, PyromeSource, create_progress_bar, discover_pyrome_files, is_critical_error,
    setup_logging,
};
use crate::app::models::SummaryRecord;
use crate::app::services::climatology_parser::ClimatologyParser;
use crate::app::services::{erc_analysis, fms_writer, summary_writer, wind_analysis};
use crate::cli::args::ConvertArgs;
use crate::config::Config;
use crate::constants::{FMS_PERCENTILES, fms_output_filename, summary_output_filename};
use crate::{Error, Result};
use colored::Colorize;
use indicatif::HumanDuration;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info};

/// Convert command runner
///
/// This function orchestrates the entire conversion workflow:
/// 1. Set up logging and configuration
/// 2. Discover the pyrome input manifest
/// 3. Convert each pyrome independently, isolating failures
/// 4. Report batch statistics
pub fn run_convert(args: ConvertArgs) -> Result<BatchStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting pyrome processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = Config::new(
        args.input_dir.clone(),
        args.output_dir.clone(),
        args.force_overwrite,
        args.dry_run,
    );
    config.validate()?;

    let manifest = discover_pyrome_files(&config.input_dir)?;
    if manifest.is_empty() {
        return Err(Error::discovery(format!(
            "No PY_*.txt files found in input directory: {}",
            config.input_dir.display()
        )));
    }
    info!("Converting {} pyrome files", manifest.len());

    if config.dry_run {
        return run_dry_run(&config, &manifest, start_time);
    }

    config.ensure_output_directory()?;

    let mut stats = BatchStats {
        files_discovered: manifest.len(),
        ..Default::default()
    };

    let progress_bar = if args.show_progress() {
        Some(create_progress_bar(
            manifest.len() as u64,
            "Converting pyrome files...",
        ))
    } else {
        None
    };

    for source in &manifest {
        match convert_pyrome(&config, source) {
            Ok(outputs) => {
                stats.files_converted += 1;
                stats.outputs_written += outputs;
            }
            Err(e) => {
                // A bad file never blocks the rest of the batch
                if is_critical_error(&e) {
                    if let Some(pb) = &progress_bar {
                        pb.abandon();
                    }
                    return Err(e);
                }
                error!("Failed to convert pyrome {}: {}", source.pyrome_id, e);
                stats.files_failed += 1;
                stats.failures.push((source.pyrome_id, e.to_string()));
            }
        }
        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message(format!(
            "Converted {} of {} pyromes",
            stats.files_converted,
            manifest.len()
        ));
    }

    stats.processing_time = start_time.elapsed();

    if !args.quiet {
        print_final_report(&stats);
    }

    Ok(stats)
}

/// Perform a dry run showing what would be converted
fn run_dry_run(
    config: &Config,
    manifest: &[PyromeSource],
    start_time: Instant,
) -> Result<BatchStats> {
    info!("Performing dry run - no files will be created");

    for source in manifest {
        let file_name = source.file_name()?;
        info!(
            "Would convert pyrome {} from {}",
            source.pyrome_id,
            source.path.display()
        );
        for spec in &FMS_PERCENTILES {
            info!(
                "  Would create: {}",
                config
                    .output_dir
                    .join(fms_output_filename(file_name, spec.percentile))
                    .display()
            );
        }
        info!(
            "  Would create: {}",
            config
                .output_dir
                .join(summary_output_filename(file_name))
                .display()
        );
    }

    info!(
        "Dry run complete: {} pyromes, {} files would be written",
        manifest.len(),
        manifest.len() * (FMS_PERCENTILES.len() + 1)
    );

    Ok(BatchStats {
        files_discovered: manifest.len(),
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}

/// Convert one pyrome file into its four output products
///
/// Returns the number of output files written. Exposed for integration
/// testing of the per-file pipeline.
pub fn convert_pyrome(config: &Config, source: &PyromeSource) -> Result<usize> {
    info!(
        "Converting pyrome {} from {}",
        source.pyrome_id,
        source.path.display()
    );

    let climatology = ClimatologyParser::parse_file(&source.path)?;

    let peak = erc_analysis::peak_month(&climatology.erc).ok_or_else(|| {
        Error::malformed_header(
            source.path.display().to_string(),
            "no daily ERC records to derive a peak month from",
        )
    })?;
    debug!(
        "Peak-ERC month for pyrome {}: {} (mean ERC {:.2})",
        source.pyrome_id, peak.month, peak.mean_erc
    );

    let wind = wind_analysis::summarize(climatology.wind_for_month(peak.month));
    let file_name = source.file_name()?;

    let mut outputs = 0;

    for spec in &FMS_PERCENTILES {
        let path = config
            .output_dir
            .join(fms_output_filename(file_name, spec.percentile));
        check_overwrite(config, &path)?;
        fms_writer::write_fms_file(
            &path,
            spec,
            climatology.fuel_moisture.percentile_row(spec.percentile),
        )?;
        outputs += 1;
    }

    let record = SummaryRecord::new(source.pyrome_id, peak.mean_erc, peak.month, &wind);
    let path = config.output_dir.join(summary_output_filename(file_name));
    check_overwrite(config, &path)?;
    summary_writer::write_summary_file(&path, &record)?;
    outputs += 1;

    Ok(outputs)
}

/// Fail the pyrome if the output exists and overwriting was not requested
fn check_overwrite(config: &Config, path: &Path) -> Result<()> {
    if !config.force_overwrite && path.exists() {
        return Err(Error::output_exists(path.display().to_string()));
    }
    Ok(())
}

/// Print the human-readable batch report
fn print_final_report(stats: &BatchStats) {
    println!();
    if stats.files_failed == 0 {
        println!("{}", "Conversion complete".green().bold());
    } else {
        println!("{}", "Conversion finished with failures".yellow().bold());
    }
    println!("  Pyromes discovered: {}", stats.files_discovered);
    println!("  Pyromes converted:  {}", stats.files_converted);
    println!("  Output files:       {}", stats.outputs_written);
    println!(
        "  Elapsed:            {}",
        HumanDuration(stats.processing_time)
    );

    if !stats.failures.is_empty() {
        println!(
            "  {}",
            format!("Failed pyromes ({}):", stats.files_failed).red().bold()
        );
        for (pyrome_id, reason) in &stats.failures {
            println!("    pyrome {}: {}", pyrome_id, reason);
        }
    }
}
