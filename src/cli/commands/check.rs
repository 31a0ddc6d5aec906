use crate::cli::commands::watch_handler;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{detail, error};
use crate::utils::colors::colorize_mismatch;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { files } = cmd {
        let handler = watch_handler(cfg);

        for path in files {
            if !handler.should_process(path) {
                error(format!("Not a timesheet CSV: {}", path.display()));
                continue;
            }
            // failures are reported inside handle(); move on to the next file
            let Some(found) = handler.handle(path) else {
                continue;
            };
            for r in &found {
                let (daily, total) = colorize_mismatch(&r.daily_hours, &r.total_hours);
                detail(format!(
                    "{} {}-{}  daily {daily} / total {total}",
                    r.date, r.in_time, r.out_time
                ));
            }
        }

        detail(format!("Log: {}", cfg.discrepancy_log_path().display()));
    }
    Ok(())
}
