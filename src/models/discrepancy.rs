use serde::{Deserialize, Serialize};

/// Row of the discrepancy log: a day where the daily aggregate and the
/// per-punch total disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscrepancyRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "In")]
    pub in_time: String,
    #[serde(rename = "Out")]
    pub out_time: String,
    #[serde(rename = "Daily Hours")]
    pub daily_hours: String,
    #[serde(rename = "Total Hours")]
    pub total_hours: String,
    #[serde(rename = "File")]
    pub source_file: String,
    #[serde(rename = "ProcessedAt")]
    pub processed_at: String,
}

/// Log header, in column order.
pub const LOG_HEADERS: [&str; 7] = [
    "Date",
    "In",
    "Out",
    "Daily Hours",
    "Total Hours",
    "File",
    "ProcessedAt",
];
