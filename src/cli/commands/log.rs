use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::discrepancy::DiscrepancyLog;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { file } = cmd {
        let log = DiscrepancyLog::new(cfg.discrepancy_log_path());
        LogLogic::print_log(&log, file.as_deref())?;
    }
    Ok(())
}
