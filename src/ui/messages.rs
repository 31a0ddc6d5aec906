//! Console status lines.
//!
//! Every user-visible outcome of a fetch, convert or check run goes through
//! one of these helpers so that success, warning and failure stay visually
//! distinct.

use crate::utils::colors::{BLUE, BOLD, GREEN, GREY, RED, RESET, YELLOW};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}{ICON_INFO}{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}{ICON_OK}{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}{ICON_WARN}{RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}{ICON_ERR}{RESET} {msg}");
}

/// Secondary line printed under a status line (file paths, counts).
pub fn detail<T: fmt::Display>(msg: T) {
    println!("   {GREY}{msg}{RESET}");
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}====================== {msg}\n{RESET}");
}
