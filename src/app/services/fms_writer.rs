//! Initial fuel-moisture (.fms) file emission
//!
//! A .fms file replicates one dryness percentile's three moisture values
//! across the fixed 1..=256 fuel-type enumeration, with that percentile's
//! fixed (low, high) bound pair. FlamMap keys rows by fuel type even though
//! the values never vary by fuel type, so the broadcast is explicit here.
//!
//! Output is written to a temporary file in the destination directory and
//! persisted into its final name, so a partially written .fms is never
//! observable.

use crate::app::models::FuelMoistureRow;
use crate::constants::{FUEL_TYPE_COUNT, PercentileSpec, fms_header_label};
use crate::{Error, Result};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Write one tab-separated .fms file for a percentile
pub fn write_fms_file(
    path: &Path,
    spec: &PercentileSpec,
    moisture: &FuelMoistureRow,
) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
        Error::io(
            format!("Failed to create temporary file in '{}'", dir.display()),
            e,
        )
    })?;

    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(tmp.as_file_mut());

        let label = fms_header_label(spec.percentile);
        writer.write_record(["Fuel type", label.as_str(), "", "", "", ""])?;

        let fm1 = format_value(moisture.fm1);
        let fm10 = format_value(moisture.fm10);
        let fm100 = format_value(moisture.fm100);
        let low = spec.low_bound.to_string();
        let high = spec.high_bound.to_string();

        for fuel_type in 1..=FUEL_TYPE_COUNT {
            writer.write_record([
                fuel_type.to_string().as_str(),
                &fm1,
                &fm10,
                &fm100,
                &low,
                &high,
            ])?;
        }

        writer
            .flush()
            .map_err(|e| Error::io("Failed to flush .fms output", e))?;
    }

    tmp.persist(path)?;
    debug!(
        "Wrote {} fuel-type rows for percentile {} to '{}'",
        FUEL_TYPE_COUNT,
        spec.percentile,
        path.display()
    );
    Ok(())
}

/// Render a moisture value the way it appeared in the source table
fn format_value(value: f64) -> String {
    format!("{}", value)
}
