//! Folder watcher feeding new and modified CSVs to the discrepancy check.
//!
//! Events are handled one at a time on the calling thread. A failure on one
//! file is reported and the loop keeps going.

use crate::core::alerts::Notifier;
use crate::core::discrepancy::DiscrepancyProcessor;
use crate::errors::{AppError, AppResult};
use crate::models::discrepancy::DiscrepancyRecord;
use crate::ui::messages::{error, info, success, warning};
use crate::utils::path::is_csv;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

const SHUTDOWN_POLL: Duration = Duration::from_millis(500);

pub struct WatchHandler {
    processor: DiscrepancyProcessor,
    notifier: Box<dyn Notifier>,
}

impl WatchHandler {
    pub fn new(processor: DiscrepancyProcessor, notifier: Box<dyn Notifier>) -> Self {
        Self {
            processor,
            notifier,
        }
    }

    /// CSV files only, and never the discrepancy log itself.
    pub fn should_process(&self, path: &Path) -> bool {
        is_csv(path) && !same_file(path, self.processor.log().path())
    }

    /// Process one file. Errors stop here: they are reported and `None`
    /// is returned.
    pub fn handle(&self, path: &Path) -> Option<Vec<DiscrepancyRecord>> {
        info(format!("Processing {}", path.display()));

        match self.processor.process(path) {
            Ok(found) => {
                if found.is_empty() {
                    success(format!("No discrepancies in {}", path.display()));
                } else {
                    warning(format!(
                        "Logged {} discrepancies from {}",
                        found.len(),
                        path.display()
                    ));
                }
                self.notifier.notify(path, &found);
                Some(found)
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "discrepancy check failed");
                error(format!("Failed to process {}: {e}", path.display()));
                None
            }
        }
    }

    /// Handle a create/modify event; returns how many files were processed.
    pub fn handle_event(&self, event: &Event) -> usize {
        if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
            return 0;
        }

        event
            .paths
            .iter()
            .filter(|p| p.is_file() && self.should_process(p))
            .filter_map(|p| self.handle(p))
            .count()
    }

    /// Process every CSV already under `folder`, recursively.
    pub fn initial_scan(&self, folder: &Path) -> AppResult<usize> {
        info("Scanning existing CSV files...");
        let mut processed = 0;
        for path in collect_csv_files(folder)? {
            if self.should_process(&path) && self.handle(&path).is_some() {
                processed += 1;
            }
        }
        info(format!("Scan complete: {processed} file(s) processed"));
        Ok(processed)
    }
}

/// All `*.csv` files under `dir`, sorted for a stable processing order.
pub fn collect_csv_files(dir: &Path) -> AppResult<Vec<PathBuf>> {
    let mut out = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if is_csv(&path) {
                out.push(path);
            }
        }
    }

    out.sort();
    Ok(out)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Watch `folder` until Ctrl-C.
pub fn run(handler: &WatchHandler, folder: &Path, initial_scan: bool) -> AppResult<()> {
    fs::create_dir_all(folder)?;

    if initial_scan {
        handler.initial_scan(folder)?;
    }

    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))
        .map_err(|e| AppError::Other(format!("cannot install Ctrl-C handler: {e}")))?;

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx)?;
    watcher.watch(folder, RecursiveMode::Recursive)?;

    info(format!("Monitoring folder: {}", folder.display()));

    while running.load(Ordering::SeqCst) {
        match rx.recv_timeout(SHUTDOWN_POLL) {
            Ok(Ok(event)) => {
                tracing::debug!(kind = ?event.kind, paths = ?event.paths, "fs event");
                handler.handle_event(&event);
            }
            Ok(Err(e)) => error(format!("Watcher error: {e}")),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    watcher.unwatch(folder)?;
    info("Watcher stopped");
    Ok(())
}
