//! Pay-period resolution and the per-period output folder name.

use crate::models::record::TimesheetRecord;
use crate::utils::date::{folder_date, parse_portal_date};
use crate::utils::path::sanitize_folder_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayPeriod {
    pub start: String,
    pub end: String,
}

impl PayPeriod {
    /// The first record carrying both pay-period bounds wins; otherwise the
    /// earliest and latest work dates are used. `None` means the portal has
    /// no data for the period yet.
    pub fn resolve(records: &[TimesheetRecord]) -> Option<Self> {
        let explicit = records.iter().find_map(|rec| {
            let start = rec.text("dPayPeriodStart").filter(|s| !s.is_empty())?;
            let end = rec.text("dPayPeriodEnd").filter(|s| !s.is_empty())?;
            Some(Self { start, end })
        });
        if explicit.is_some() {
            return explicit;
        }

        let work_dates: Vec<String> = records
            .iter()
            .filter_map(|rec| rec.text("dWorkDate"))
            .filter(|s| !s.is_empty())
            .collect();

        // compare as dates where possible, unparseable strings sort first
        let key = |s: &&String| (parse_portal_date(s), (*s).clone());
        let start = work_dates.iter().min_by_key(key)?;
        let end = work_dates.iter().max_by_key(key)?;

        Some(Self {
            start: start.clone(),
            end: end.clone(),
        })
    }

    /// `03-16-22_to_03-29-22`; an unparseable bound becomes `unknown`.
    pub fn folder_name(&self) -> String {
        let fmt = |raw: &str| {
            parse_portal_date(raw)
                .map(folder_date)
                .unwrap_or_else(|| "unknown".to_string())
        };
        sanitize_folder_name(&format!("{}_to_{}", fmt(&self.start), fmt(&self.end)))
    }
}
