use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::fetch::FetchLogic;
use crate::errors::AppResult;
use crate::export::{ensure_writable, notify_export_success};
use crate::ui::messages::{detail, info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        input,
        out,
        profile,
        force,
    } = cmd
    {
        let profile = cfg.resolve_profile(profile.as_deref())?;
        let out = out.clone().unwrap_or_else(|| input.with_extension("csv"));

        ensure_writable(&out, *force)?;
        info(format!(
            "Converting {} with profile '{}'",
            input.display(),
            profile.name
        ));

        let output = FetchLogic::convert(input, &out, &profile)?;

        if output.rows.is_empty() {
            warning("No DataList records found; the CSV only contains headers");
        }
        for fb in &output.fallbacks {
            detail(format!("row {}: '{}' kept raw value '{}'", fb.row + 1, fb.column, fb.raw));
        }
        notify_export_success("Timesheet CSV", &out);
    }
    Ok(())
}
