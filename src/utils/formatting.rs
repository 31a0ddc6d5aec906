//! Formatting utilities used for CSV cells and CLI outputs.

/// Fixed-precision hours, e.g. `format_hours(8.0, 2) == "8.00"`.
pub fn format_hours(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Keep the first two characters of a secret and hide the rest.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    let visible: String = secret.chars().take(2).collect();
    format!("{visible}******")
}
