//! Path utilities: folder-name sanitizing, `~` expansion, CSV detection.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[\\/:*?"<>|]"#).expect("static regex"))
}

/// Replace filesystem-unsafe characters and spaces with underscores.
pub fn sanitize_folder_name(name: &str) -> String {
    unsafe_chars().replace_all(name, "_").replace(' ', "_")
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

pub fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}
