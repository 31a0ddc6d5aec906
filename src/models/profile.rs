//! Column profiles.
//!
//! The portal exposes two API shapes for the same timesheet. A profile is
//! the data table that maps one of those shapes onto an ordered list of CSV
//! columns, so the transformer itself never branches on the variant.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Header text matched literally by downstream tools: note the
/// non-breaking space before the asterisk.
pub const DAILY_HOURS_HEADER: &str = "Daily Hours\u{a0}*";
pub const TOTAL_HOURS_HEADER: &str = "Total Hours\u{a0}*";

pub const HISTORICAL: &str = "historical";
pub const CURRENT: &str = "current";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupFormat {
    /// `<value> [<description>]`
    #[default]
    ValueWithDescription,
    Value,
    Description,
}

/// How one output column is derived from a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ColumnRule {
    /// Always empty; filler column.
    Blank,
    /// `Wed 03/16/2022` from the profile's work-date fields.
    WorkDate,
    /// `HH:MM AM/PM` from a `MM/DD/YYYY HH:MM:SS` field.
    Time { field: String },
    /// Two decimals, `0.00` when missing. First present field wins.
    Hours { fields: Vec<String> },
    /// Per-day aggregate, only on the last punch of the day.
    DailyTotal,
    /// Per-punch total, one decimal.
    PunchTotal,
    /// Group value lookup; numbers are tried in order.
    Group {
        numbers: Vec<i64>,
        #[serde(default)]
        format: GroupFormat,
    },
    /// Raw field; numbers rendered with two decimals.
    Text { field: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub header: String,
    #[serde(flatten)]
    pub rule: ColumnRule,
}

impl ColumnSpec {
    fn new(header: &str, rule: ColumnRule) -> Self {
        Self {
            header: header.to_string(),
            rule,
        }
    }

    fn blank() -> Self {
        Self::new("", ColumnRule::Blank)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Calendar day of the punch; first present field wins.
    pub work_date_fields: Vec<String>,
    /// Clock-out timestamp, used as the secondary sort key.
    pub out_time_field: String,
    /// Summed per day for the daily aggregate.
    pub daily_sum_fields: Vec<String>,
    /// Per-punch total shown on every row.
    pub punch_total_fields: Vec<String>,
    /// Record keys holding group value arrays, concatenated in order.
    pub group_lists: Vec<String>,
    pub columns: Vec<ColumnSpec>,
}

fn names(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

impl Profile {
    /// `timesheetdetail` API: 20 columns with blank fillers.
    pub fn historical() -> Self {
        use ColumnRule::*;
        Self {
            name: HISTORICAL.to_string(),
            description: "timesheetdetail API, 20 columns with blank fillers".to_string(),
            work_date_fields: names(&["dWorkDate"]),
            out_time_field: "dOut".to_string(),
            daily_sum_fields: names(&["nDailyTotalHours", "nTotalHours"]),
            punch_total_fields: names(&["nDailyTotalHours", "nTotalHours"]),
            group_lists: names(&["GroupValueList"]),
            columns: vec![
                ColumnSpec::new("Date", WorkDate),
                ColumnSpec::new("Pay Code", Text { field: "cPayCodeDescription".into() }),
                ColumnSpec::new("In", Time { field: "dIn".into() }),
                ColumnSpec::blank(),
                ColumnSpec::new("Out", Time { field: "dOut".into() }),
                ColumnSpec::blank(),
                ColumnSpec::new("Reg", Hours { fields: names(&["nWorkHours"]) }),
                ColumnSpec::new("OT-1", Hours { fields: names(&["nOT1Pay"]) }),
                ColumnSpec::new("OT-2", Hours { fields: names(&["nOT2Pay"]) }),
                ColumnSpec::new(DAILY_HOURS_HEADER, DailyTotal),
                ColumnSpec::new("Shift Exp", Text { field: "cExpCode".into() }),
                ColumnSpec::new("Schedule", Text { field: "cSchedule".into() }),
                ColumnSpec::new(TOTAL_HOURS_HEADER, PunchTotal),
                ColumnSpec::new(
                    "Account",
                    Group { numbers: vec![12], format: GroupFormat::ValueWithDescription },
                ),
                ColumnSpec::new(
                    "ActShortCode",
                    Group { numbers: vec![3], format: GroupFormat::ValueWithDescription },
                ),
                ColumnSpec::new(
                    "Facility",
                    Group { numbers: vec![1], format: GroupFormat::ValueWithDescription },
                ),
                ColumnSpec::blank(),
                ColumnSpec::blank(),
                ColumnSpec::blank(),
                ColumnSpec::blank(),
            ],
        }
    }

    /// Pay-period capture from the timesheet page: 14 columns.
    pub fn current() -> Self {
        use ColumnRule::*;
        Self {
            name: CURRENT.to_string(),
            description: "pay-period capture from the timesheet page, 14 columns".to_string(),
            work_date_fields: names(&["dWorkDate", "DateKey"]),
            out_time_field: "dOut".to_string(),
            daily_sum_fields: names(&["nWorkHours"]),
            punch_total_fields: names(&["nWeeklyHours"]),
            group_lists: names(&["GroupingList", "GroupValueList"]),
            columns: vec![
                ColumnSpec::new("Date", WorkDate),
                ColumnSpec::new("Pay Code", Text { field: "cPayCodeDescription".into() }),
                ColumnSpec::new("In", Time { field: "dIn".into() }),
                ColumnSpec::new("Out", Time { field: "dOut".into() }),
                ColumnSpec::new("Reg", Hours { fields: names(&["nWorkHours"]) }),
                ColumnSpec::new("OT-1", Hours { fields: names(&["nOT1Hours"]) }),
                ColumnSpec::new("OT-2", Hours { fields: names(&["nOT2Hours"]) }),
                ColumnSpec::new(DAILY_HOURS_HEADER, DailyTotal),
                ColumnSpec::new("Shift Exp", Text { field: "cShiftExpression".into() }),
                ColumnSpec::new("Schedule", Text { field: "cSchedule".into() }),
                ColumnSpec::new(TOTAL_HOURS_HEADER, PunchTotal),
                ColumnSpec::new(
                    "Account",
                    Group { numbers: vec![3], format: GroupFormat::Description },
                ),
                ColumnSpec::new(
                    "ActShortCode",
                    Group { numbers: vec![3], format: GroupFormat::Value },
                ),
                ColumnSpec::new(
                    "Facility",
                    Group { numbers: vec![17, 16], format: GroupFormat::Description },
                ),
            ],
        }
    }

    pub fn builtins() -> Vec<Profile> {
        vec![Self::historical(), Self::current()]
    }

    /// Look a profile up by name. User-defined profiles shadow built-ins.
    pub fn resolve(name: &str, custom: &[Profile]) -> AppResult<Profile> {
        custom
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .cloned()
            .or_else(|| {
                Self::builtins()
                    .into_iter()
                    .find(|p| p.name.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| AppError::UnknownProfile(name.to_string()))
    }

    pub fn header(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.header.clone()).collect()
    }
}
