use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write a default config file if none exists.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rTimecard…");

    let (path, created) = Config::init_file(cli.config.as_deref())?;
    if created {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!("Config file already present: {}", path.display()));
    }

    info("Credentials and webhooks are read from the environment or a .env file");
    Ok(())
}
