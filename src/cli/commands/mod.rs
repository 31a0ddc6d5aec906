pub mod check;
pub mod config;
pub mod convert;
pub mod fetch;
pub mod init;
pub mod log;
pub mod profiles;
pub mod watch;

use crate::config::Config;
use crate::core::alerts::ConsoleNotifier;
use crate::core::discrepancy::{DiscrepancyLog, DiscrepancyProcessor};
use crate::core::watch::WatchHandler;

/// Handler shared by `check` and `watch`.
pub(crate) fn watch_handler(cfg: &Config) -> WatchHandler {
    let processor = DiscrepancyProcessor::new(DiscrepancyLog::new(cfg.discrepancy_log_path()));
    WatchHandler::new(
        processor,
        Box::new(ConsoleNotifier::from_config(&cfg.notifications)),
    )
}
