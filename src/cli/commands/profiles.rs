use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::profile::{ColumnRule, GroupFormat, Profile};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profiles { name } = cmd {
        match name {
            Some(name) => print_columns(&cfg.resolve_profile(Some(name))?),
            None => print_list(cfg),
        }
    }
    Ok(())
}

fn print_list(cfg: &Config) {
    let mut table = Table::new(&["Name", "Columns", "Description"]);
    for p in cfg.profiles.iter().cloned().chain(Profile::builtins()) {
        let name = if p.name.eq_ignore_ascii_case(&cfg.profile) {
            format!("{CYAN}{}*{RESET}", p.name)
        } else {
            p.name.clone()
        };
        table.add_row(vec![name, p.columns.len().to_string(), p.description.clone()]);
    }
    print!("{}", table.render());
    println!("\n* active profile");
}

fn print_columns(profile: &Profile) {
    println!("📋 Profile '{}': {}\n", profile.name, profile.description);

    let mut table = Table::new(&["#", "Header", "Source"]);
    for (i, col) in profile.columns.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            col.header.replace('\u{a0}', " "),
            describe_rule(&col.rule, profile),
        ]);
    }
    print!("{}", table.render());
}

fn describe_rule(rule: &ColumnRule, profile: &Profile) -> String {
    match rule {
        ColumnRule::Blank => "(blank)".to_string(),
        ColumnRule::WorkDate => format!("date of {}", profile.work_date_fields.join(" | ")),
        ColumnRule::Time { field } => format!("clock time of {field}"),
        ColumnRule::Hours { fields } => format!("{} (2 dp)", fields.join(" | ")),
        ColumnRule::DailyTotal => format!(
            "sum of {} per day, last punch only",
            profile.daily_sum_fields.join(" | ")
        ),
        ColumnRule::PunchTotal => format!("{} (1 dp)", profile.punch_total_fields.join(" | ")),
        ColumnRule::Group { numbers, format } => {
            let nums: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
            let shape = match format {
                GroupFormat::ValueWithDescription => "value [description]",
                GroupFormat::Value => "value",
                GroupFormat::Description => "description",
            };
            format!("group {} → {shape}", nums.join(", "))
        }
        ColumnRule::Text { field } => field.clone(),
    }
}
