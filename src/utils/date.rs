//! Date helpers for the portal's `MM/DD/YYYY[ HH:MM:SS]` strings.

use chrono::{Local, NaiveDate, NaiveDateTime};

pub const PORTAL_DATE: &str = "%m/%d/%Y";
pub const PORTAL_DATETIME: &str = "%m/%d/%Y %H:%M:%S";

/// Date portion of a portal timestamp: everything before the first space.
pub fn date_token(raw: &str) -> &str {
    raw.split_whitespace().next().unwrap_or("")
}

pub fn parse_portal_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_token(raw), PORTAL_DATE).ok()
}

pub fn parse_portal_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), PORTAL_DATETIME).ok()
}

/// `Wed 03/16/2022`
pub fn weekday_date(d: NaiveDate) -> String {
    d.format("%a %m/%d/%Y").to_string()
}

/// `04:30 PM`
pub fn clock_time(dt: NaiveDateTime) -> String {
    dt.format("%I:%M %p").to_string()
}

/// `03-16-22`, used in pay-period folder names.
pub fn folder_date(d: NaiveDate) -> String {
    d.format("%m-%d-%y").to_string()
}

pub fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
