// src/export/raw_json.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_parent_dir;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Raw API document, pretty-printed.
pub fn write_pretty_json(path: &Path, document: &Value) -> AppResult<()> {
    ensure_parent_dir(path)?;

    let json = serde_json::to_string_pretty(document)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
