use crate::cli::commands::watch_handler;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::alerts::enabled_channels;
use crate::core::watch;
use crate::errors::AppResult;
use crate::ui::messages::{detail, header};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { dir, initial_scan } = cmd {
        let folder = dir.clone().unwrap_or_else(|| cfg.output_path());
        let handler = watch_handler(cfg);

        header("rTimecard watcher");
        detail(format!("Log file: {}", cfg.discrepancy_log_path().display()));
        let channels: Vec<&str> = enabled_channels(&cfg.notifications)
            .iter()
            .map(|c| c.label())
            .collect();
        if !channels.is_empty() {
            detail(format!("Notifications: {}", channels.join(", ")));
        }

        watch::run(&handler, &folder, *initial_scan || cfg.initial_scan)?;
    }
    Ok(())
}
