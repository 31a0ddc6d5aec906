// src/export/timesheet_csv.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_parent_dir;
use crate::models::row::TransformOutput;
use std::path::Path;

/// Header line first, then one line per row. A transform with no rows
/// still yields a valid header-only file.
pub fn write_timesheet_csv(path: &Path, output: &TransformOutput) -> AppResult<()> {
    ensure_parent_dir(path)?;

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(&output.header)?;
    for row in &output.rows {
        wtr.write_record(&row.cells)?;
    }
    wtr.flush()?;

    tracing::debug!(path = %path.display(), rows = output.rows.len(), "timesheet CSV written");
    Ok(())
}
