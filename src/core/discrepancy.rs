//! Daily-vs-total hour check over timesheet CSVs and the append-only log.

use crate::errors::{AppError, AppResult};
use crate::models::discrepancy::DiscrepancyRecord;
use crate::models::profile::{DAILY_HOURS_HEADER, TOTAL_HOURS_HEADER};
use crate::utils::date::now_stamp;
use std::fs::{self, File, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};

/// The fields of a timesheet row the check looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckRow {
    pub date: String,
    pub in_time: String,
    pub out_time: String,
    pub daily_hours: String,
    pub total_hours: String,
}

/// Headers match with non-breaking and regular spaces treated alike.
fn normalize_header(h: &str) -> String {
    h.replace('\u{a0}', " ").trim().to_string()
}

/// Parse a timesheet CSV. The daily and total columns are required;
/// Date/In/Out read as empty when absent.
pub fn read_rows<R: Read>(reader: R) -> AppResult<Vec<CheckRow>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(normalize_header).collect();

    let find = |name: &str| {
        let wanted = normalize_header(name);
        headers.iter().position(|h| *h == wanted)
    };

    let daily = find(DAILY_HOURS_HEADER)
        .ok_or_else(|| AppError::MissingColumn(normalize_header(DAILY_HOURS_HEADER)))?;
    let total = find(TOTAL_HOURS_HEADER)
        .ok_or_else(|| AppError::MissingColumn(normalize_header(TOTAL_HOURS_HEADER)))?;
    let date = find("Date");
    let in_time = find("In");
    let out_time = find("Out");

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or("")
                .to_string()
        };
        rows.push(CheckRow {
            date: cell(date),
            in_time: cell(in_time),
            out_time: cell(out_time),
            daily_hours: cell(Some(daily)),
            total_hours: cell(Some(total)),
        });
    }

    Ok(rows)
}

/// Rows whose daily and total cells are both non-empty and differ as
/// trimmed strings. `8.0` vs `8.00` is a mismatch.
pub fn check_discrepancies(
    rows: &[CheckRow],
    source_file: &str,
    processed_at: &str,
) -> Vec<DiscrepancyRecord> {
    rows.iter()
        .filter_map(|row| {
            let daily = row.daily_hours.trim();
            let total = row.total_hours.trim();
            if daily.is_empty() || total.is_empty() || daily == total {
                return None;
            }
            Some(DiscrepancyRecord {
                date: row.date.clone(),
                in_time: row.in_time.clone(),
                out_time: row.out_time.clone(),
                daily_hours: daily.to_string(),
                total_hours: total.to_string(),
                source_file: source_file.to_string(),
                processed_at: processed_at.to_string(),
            })
        })
        .collect()
}

/// Append-only CSV log. The header is written when the file is first
/// created; rows are never deduplicated.
#[derive(Debug, Clone)]
pub struct DiscrepancyLog {
    path: PathBuf,
}

impl DiscrepancyLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, records: &[DiscrepancyRecord]) -> AppResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let has_content = fs::metadata(&self.path)
            .map(|m| m.len() > 0)
            .unwrap_or(false);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(!has_content)
            .from_writer(file);
        for record in records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;

        tracing::debug!(path = %self.path.display(), rows = records.len(), "discrepancy log appended");
        Ok(())
    }

    /// All logged rows; an absent log reads as empty.
    pub fn read(&self) -> AppResult<Vec<DiscrepancyRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::Reader::from_path(&self.path)?;
        let mut out = Vec::new();
        for record in rdr.deserialize() {
            out.push(record?);
        }
        Ok(out)
    }
}

/// Single entry point per file: read, check, append to the log.
#[derive(Debug, Clone)]
pub struct DiscrepancyProcessor {
    log: DiscrepancyLog,
}

impl DiscrepancyProcessor {
    pub fn new(log: DiscrepancyLog) -> Self {
        Self { log }
    }

    pub fn log(&self) -> &DiscrepancyLog {
        &self.log
    }

    /// Not idempotent: processing the same file twice logs its rows twice.
    pub fn process(&self, path: &Path) -> AppResult<Vec<DiscrepancyRecord>> {
        let rows = read_rows(File::open(path)?)?;
        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let found = check_discrepancies(&rows, &source, &now_stamp());
        self.log.append(&found)?;
        Ok(found)
    }
}
