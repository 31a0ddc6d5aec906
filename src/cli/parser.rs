use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rTimecard
#[derive(Parser)]
#[command(
    name = "rtimecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fetch portal timesheets, convert them to CSV and flag daily hour discrepancies",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the base output directory (pay-period folders live here)
    #[arg(global = true, long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Verbose diagnostics (debug level)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Only log errors
    #[arg(global = true, long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with defaults
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration (secrets masked)")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Fetch the timesheet and save JSON + CSV in its pay-period folder
    Fetch {
        /// Use a captured API response instead of calling the portal
        #[arg(long = "from-file", value_name = "JSON")]
        from_file: Option<PathBuf>,

        /// Column profile (historical, current, or a custom one)
        #[arg(long)]
        profile: Option<String>,
    },

    /// Convert a saved API response to CSV
    Convert {
        /// Saved timesheet JSON
        input: PathBuf,

        /// Output CSV (default: input path with .csv extension)
        #[arg(long, short = 'o', value_name = "FILE")]
        out: Option<PathBuf>,

        #[arg(long)]
        profile: Option<String>,

        /// Overwrite the output file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Check timesheet CSVs for daily hour discrepancies
    Check {
        #[arg(required = true, value_name = "CSV")]
        files: Vec<PathBuf>,
    },

    /// Watch a folder and check every created or modified CSV
    Watch {
        /// Folder to watch (default: output directory)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Check existing CSV files before watching
        #[arg(long = "initial-scan")]
        initial_scan: bool,
    },

    /// Print the discrepancy log
    Log {
        /// Only rows from this source file name
        #[arg(long, value_name = "NAME")]
        file: Option<String>,
    },

    /// List column profiles
    Profiles {
        /// Show the columns of one profile
        name: Option<String>,
    },
}
