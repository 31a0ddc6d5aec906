use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::fetch::{FetchLogic, FetchOutcome, Fetcher, FileFetcher, HttpFetcher};
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::{detail, info, warning};
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fetch { from_file, profile } = cmd {
        let profile = cfg.resolve_profile(profile.as_deref())?;

        let fetcher: Box<dyn Fetcher> = match from_file {
            Some(path) => {
                info(format!("Reading captured response: {}", path.display()));
                Box::new(FileFetcher::new(path))
            }
            None => Box::new(HttpFetcher::new(
                &cfg.portal,
                Duration::from_secs(cfg.fetch_timeout_secs),
            )?),
        };

        let base = cfg.output_path();
        info(format!("Base output directory: {}", base.display()));

        match FetchLogic::run(fetcher.as_ref(), &base, &profile)? {
            FetchOutcome::NoData => warning("No timecard data available yet"),
            FetchOutcome::Saved {
                folder,
                json_path,
                csv_path,
                output,
            } => {
                detail(format!("Pay-period folder: {}", folder.display()));
                notify_export_success("Timesheet JSON", &json_path);
                notify_export_success("Timesheet CSV", &csv_path);
                detail(format!(
                    "{} row(s), profile '{}'",
                    output.rows.len(),
                    profile.name
                ));
                if !output.fallbacks.is_empty() {
                    warning(format!(
                        "{} field(s) could not be parsed and were kept as-is",
                        output.fallbacks.len()
                    ));
                }
            }
        }
    }
    Ok(())
}
