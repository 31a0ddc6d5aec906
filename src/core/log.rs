use crate::core::discrepancy::DiscrepancyLog;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::{colorize_mismatch, colorize_optional};
use crate::utils::table::Table;

pub struct LogLogic;

impl LogLogic {
    /// Print the discrepancy log, optionally only rows from `file`.
    pub fn print_log(log: &DiscrepancyLog, file: Option<&str>) -> AppResult<()> {
        let entries: Vec<_> = log
            .read()?
            .into_iter()
            .filter(|r| file.is_none_or(|f| r.source_file == f))
            .collect();

        if entries.is_empty() {
            warning(format!("No discrepancies logged in {}", log.path().display()));
            return Ok(());
        }

        println!("📜 Discrepancy log: {}\n", log.path().display());

        let mut table = Table::new(&[
            "Processed at",
            "File",
            "Date",
            "In",
            "Out",
            "Daily",
            "Total",
        ]);
        for r in &entries {
            let (daily, total) = colorize_mismatch(&r.daily_hours, &r.total_hours);
            table.add_row(vec![
                r.processed_at.clone(),
                r.source_file.clone(),
                colorize_optional(&r.date),
                colorize_optional(&r.in_time),
                colorize_optional(&r.out_time),
                daily,
                total,
            ]);
        }
        print!("{}", table.render());
        println!("\n{} row(s)", entries.len());

        Ok(())
    }
}
