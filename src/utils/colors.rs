/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Greys out empty cells so blank filler columns stay readable.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

/// Daily aggregate in yellow, per-punch total in red: the pair that
/// disagreed on a flagged row.
pub fn colorize_mismatch(daily: &str, total: &str) -> (String, String) {
    (
        format!("{YELLOW}{daily}{RESET}"),
        format!("{RED}{total}{RESET}"),
    )
}
