// src/export/mod.rs

mod fs_utils;
mod raw_json;
mod timesheet_csv;

pub use fs_utils::{ensure_parent_dir, ensure_writable};
pub use raw_json::write_pretty_json;
pub use timesheet_csv::write_timesheet_csv;

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion line for written artifacts.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} saved at {}", path.display()));
}
