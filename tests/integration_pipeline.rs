//! Integration tests for the full pyrome conversion pipeline
//!
//! Builds synthetic pyrome export files in a temporary directory, runs the
//! per-file conversion end to end, and verifies the emitted .fms and wind
//! summary products, including failure isolation for malformed inputs.

use pyrome_processor::cli::commands::{convert::convert_pyrome, discover_pyrome_files};
use pyrome_processor::{Config, Error, SummaryRecord};
use std::path::Path;
use tempfile::TempDir;

/// Build a synthetic export body following the documented fixed layout.
///
/// Day count equals `erc.len()`; percentile row `p` carries FM1/FM10/FM100
/// of `p/10`, `(p+1)/10`, `(p+2)/10`; wind cells come from
/// `wind_cell(month, row, col)`.
fn build_export(erc: &[(f64, &str)], wind_cell: impl Fn(u32, usize, usize) -> f64) -> String {
    let days = erc.len();
    let mut lines = Vec::new();

    lines.push("FireFamilyPlus Fire Risk Export".to_string());
    lines.push("Pyrome integration fixture".to_string());
    lines.push("ERC NFDRS 16Y".to_string());
    lines.push(format!("{} 2020", days));

    for (erc_avg, date) in erc {
        lines.push(format!("{} 4.50 10.2 {} 12.0 13.0", erc_avg, date));
    }

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

    for _ in 0..11 {
        lines.push("--".to_string());
    }

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
    lines.join("\n")
}

/// Wind cells: July carries a known distribution, every other month is flat
fn july_wind(month: u32, row: usize, col: usize) -> f64 {
    if month != 7 {
        return 0.5;
    }
    match (row, col) {
        (0, 4) => 7.95,
        (1, 4) => 21.41,
        (2, 4) => 3.17,
        (3, 4) => 0.03,
        (4, 1) => 0.02,
        (5, 1) => 0.01,
        _ => 0.0,
    }
}

/// Thirteen daily records: one per month, with a second July day so the
/// July mean differs from its individual values
fn sample_erc() -> Vec<(f64, String)> {
    let mut erc: Vec<(f64, String)> = (1..=12u32)
        .map(|month| {
            let avg = if month == 7 { 28.0 } else { 10.0 + month as f64 };
            (avg, format!("{:02}/15/2020", month))
        })
        .collect();
    erc.push((32.0, "07/20/2020".to_string()));
    erc
}

fn write_sample_pyrome(dir: &Path, name: &str) {
    let erc = sample_erc();
    let refs: Vec<(f64, &str)> = erc.iter().map(|(a, d)| (*a, d.as_str())).collect();
    std::fs::write(dir.join(name), build_export(&refs, july_wind)).unwrap();
}

fn test_config(input: &Path, output: &Path) -> Config {
    Config::new(
        Some(input.to_path_buf()),
        Some(output.to_path_buf()),
        false,
        false,
    )
}

#[test]
fn test_convert_single_pyrome_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("data");
    let output = temp_dir.path().join("results");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::create_dir_all(&output).unwrap();

    write_sample_pyrome(&input, "PY_001.txt");

    let config = test_config(&input, &output);
    let manifest = discover_pyrome_files(&input).unwrap();
    assert_eq!(manifest.len(), 1);
    assert_eq!(manifest[0].pyrome_id, 1);

    let outputs = convert_pyrome(&config, &manifest[0]).unwrap();
    assert_eq!(outputs, 4);

    for name in [
        "PY_001.txt_fms80.fms",
        "PY_001.txt_fms90.fms",
        "PY_001.txt_fms97.fms",
        "PY_001.txt_ercmax_wdir.csv",
    ] {
        assert!(output.join(name).is_file(), "missing output {}", name);
    }
}

#[test]
fn test_fms_output_contents() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("data");
    let output = temp_dir.path().join("results");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::create_dir_all(&output).unwrap();

    write_sample_pyrome(&input, "PY_009.txt");
    let config = test_config(&input, &output);
    let manifest = discover_pyrome_files(&input).unwrap();
    convert_pyrome(&config, &manifest[0]).unwrap();

    let content = std::fs::read_to_string(output.join("PY_009.txt_fms80.fms")).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 257);
    assert_eq!(lines[0], "Fuel type\t80th percentile pyrome\t\t\t\t");
    // Percentile 80 row of the synthetic table, broadcast over all fuel types
    assert_eq!(lines[1], "1\t8\t8.1\t8.2\t90\t110");
    assert_eq!(lines[256], "256\t8\t8.1\t8.2\t90\t110");

    let content = std::fs::read_to_string(output.join("PY_009.txt_fms97.fms")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Fuel type\t97th percentile pyrome\t\t\t\t");
    assert_eq!(lines[1], "1\t9.7\t9.8\t9.9\t40\t60");
}

#[test]
fn test_summary_output_contents() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("data");
    let output = temp_dir.path().join("results");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::create_dir_all(&output).unwrap();

    write_sample_pyrome(&input, "PY_042.txt");
    let config = test_config(&input, &output);
    let manifest = discover_pyrome_files(&input).unwrap();
    assert_eq!(manifest[0].pyrome_id, 42);
    convert_pyrome(&config, &manifest[0]).unwrap();

    let mut reader = csv::Reader::from_path(output.join("PY_042.txt_ercmax_wdir.csv")).unwrap();
    let record: SummaryRecord = reader.deserialize().next().unwrap().unwrap();

    assert_eq!(record.pyrome_id, 42);
    // July has records 28.0 and 32.0, the highest monthly mean
    assert_eq!(record.ercmax_month, 7);
    assert_eq!(record.ercmax, 30.0);

    // Overall predominant cell of the July table
    assert_eq!(record.wmod_dir, 180);
    assert_eq!(record.wmod_spd, 10);

    // Per-speed argmax direction and value
    assert_eq!(
        (record.wdir5, record.wdir10, record.wdir15),
        (180, 180, 180)
    );
    assert_eq!(
        (record.wdir20, record.wdir25, record.wdir30),
        (180, 45, 45)
    );
    assert_eq!(record.wdirpc5, 7.95);
    assert_eq!(record.wdirpc10, 21.41);
    assert_eq!(record.wdirpc15, 3.17);
    assert_eq!(record.wdirpc20, 0.03);
    assert_eq!(record.wdirpc25, 0.02);
    assert_eq!(record.wdirpc30, 0.01);
}

#[test]
fn test_malformed_file_fails_in_isolation() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("data");
    let output = temp_dir.path().join("results");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::create_dir_all(&output).unwrap();

    write_sample_pyrome(&input, "PY_001.txt");
    std::fs::write(input.join("PY_002.txt"), "not a valid export\n").unwrap();

    let config = test_config(&input, &output);
    let manifest = discover_pyrome_files(&input).unwrap();
    assert_eq!(manifest.len(), 2);

    // The malformed file fails on its own
    let results: Vec<_> = manifest
        .iter()
        .map(|source| convert_pyrome(&config, source))
        .collect();
    assert!(results[0].is_ok());
    assert!(results[1].is_err());

    // The good pyrome's outputs all exist, the bad one left nothing behind
    assert!(output.join("PY_001.txt_ercmax_wdir.csv").is_file());
    assert!(!output.join("PY_002.txt_ercmax_wdir.csv").exists());
    assert!(!output.join("PY_002.txt_fms80.fms").exists());
}

#[test]
fn test_existing_outputs_block_unless_forced() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("data");
    let output = temp_dir.path().join("results");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::create_dir_all(&output).unwrap();

    write_sample_pyrome(&input, "PY_001.txt");
    let manifest = discover_pyrome_files(&input).unwrap();

    let config = test_config(&input, &output);
    convert_pyrome(&config, &manifest[0]).unwrap();

    // Second run without --force refuses to clobber
    assert!(matches!(
        convert_pyrome(&config, &manifest[0]),
        Err(Error::OutputExists { .. })
    ));

    // With force_overwrite the run succeeds again
    let forced = Config::new(
        Some(input.clone()),
        Some(output.clone()),
        true,
        false,
    );
    assert_eq!(convert_pyrome(&forced, &manifest[0]).unwrap(), 4);
}
