//! Wind summary CSV emission
//!
//! Writes the one-row `_ercmax_wdir.csv` product. The header comes from the
//! [`SummaryRecord`] field names via serde, keeping the column contract in
//! one place. Like the .fms writer, output lands in a temporary file first
//! and is persisted into the final name.

use crate::app::models::SummaryRecord;
use crate::{Error, Result};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Write the summary CSV for one pyrome
pub fn write_summary_file(path: &Path, record: &SummaryRecord) -> Result<()> {
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
        let mut writer = csv::Writer::from_writer(tmp.as_file_mut());
        writer.serialize(record)?;
        writer
            .flush()
            .map_err(|e| Error::io("Failed to flush summary output", e))?;
    }

    tmp.persist(path)?;
    debug!(
        "Wrote wind summary for pyrome {} to '{}'",
        record.pyrome_id,
        path.display()
    );
    Ok(())
}
