//! Raw timesheet records → fixed-column rows.
//!
//! Records are ordered by `(work date, clock-out)`. A first pass sums the
//! profile's daily field per calendar day and remembers the last punch of
//! each day; the second pass renders one row per record, putting the daily
//! aggregate only on that last punch so a day is never counted twice.

use crate::models::profile::{ColumnRule, GroupFormat, Profile};
use crate::models::record::{GroupValue, NumberField, TimesheetRecord};
use crate::models::row::{FieldFallback, FieldValue, OutputRow, TransformOutput};
use crate::utils::date::{
    clock_time, date_token, parse_portal_date, parse_portal_datetime, weekday_date,
};
use crate::utils::formatting::format_hours;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::collections::HashMap;

/// Build the header and one row per record.
pub fn transform(records: &[TimesheetRecord], profile: &Profile) -> TransformOutput {
    let mut ordered: Vec<&TimesheetRecord> = records.iter().collect();
    // stable: records with equal keys keep their API order
    ordered.sort_by_key(|rec| sort_key(rec, profile));

    let mut daily_totals: HashMap<String, f64> = HashMap::new();
    let mut last_of_day: HashMap<String, usize> = HashMap::new();

    for (idx, rec) in ordered.iter().enumerate() {
        if let Some(day) = day_key(rec, profile) {
            *daily_totals.entry(day.clone()).or_insert(0.0) +=
                rec.first_number(&profile.daily_sum_fields).or_zero();
            last_of_day.insert(day, idx);
        }
    }

    let mut output = TransformOutput {
        header: profile.header(),
        rows: Vec::with_capacity(ordered.len()),
        fallbacks: Vec::new(),
    };

    for (idx, rec) in ordered.iter().enumerate() {
        let day = day_key(rec, profile);
        let is_last_of_day = day
            .as_ref()
            .and_then(|d| last_of_day.get(d))
            .is_some_and(|last| *last == idx);
        let groups = rec.group_values(&profile.group_lists);

        let mut cells = Vec::with_capacity(profile.columns.len());
        for column in &profile.columns {
            let value = match &column.rule {
                ColumnRule::Blank => FieldValue::Empty,
                ColumnRule::WorkDate => {
                    format_work_date(rec.first_text(&profile.work_date_fields).as_deref())
                }
                ColumnRule::Time { field } => format_clock(rec.text(field).as_deref()),
                ColumnRule::Hours { fields } => format_number(&rec.first_number(fields), 2),
                ColumnRule::DailyTotal => match (&day, is_last_of_day) {
                    (Some(d), true) => FieldValue::Formatted(format_hours(
                        daily_totals.get(d).copied().unwrap_or(0.0),
                        1,
                    )),
                    _ => FieldValue::Empty,
                },
                ColumnRule::PunchTotal => {
                    format_number(&rec.first_number(&profile.punch_total_fields), 1)
                }
                ColumnRule::Group { numbers, format } => format_group(&groups, numbers, *format),
                ColumnRule::Text { field } => format_text(rec.get(field)),
            };

            if let FieldValue::Fallback(raw) = &value {
                tracing::warn!(row = idx, column = %column.header, raw = %raw, "unparseable field kept raw");
                output.fallbacks.push(FieldFallback {
                    row: idx,
                    column: column.header.clone(),
                    raw: raw.clone(),
                });
            }
            cells.push(value.into_cell());
        }

        output.rows.push(OutputRow { cells });
    }

    output
}

/// Unparseable dates or clock-outs sort first.
fn sort_key(rec: &TimesheetRecord, profile: &Profile) -> (NaiveDate, NaiveDateTime) {
    let fallback = (NaiveDate::MIN, NaiveDateTime::MIN);

    let Some(date) = rec
        .first_text(&profile.work_date_fields)
        .and_then(|raw| parse_portal_date(&raw))
    else {
        return fallback;
    };

    match rec
        .text(&profile.out_time_field)
        .filter(|s| !s.trim().is_empty())
    {
        None => (date, NaiveDateTime::MIN),
        Some(raw) => match parse_portal_datetime(&raw) {
            Some(out) => (date, out),
            None => fallback,
        },
    }
}

/// Calendar-day key: the raw date token of the work date.
fn day_key(rec: &TimesheetRecord, profile: &Profile) -> Option<String> {
    rec.first_text(&profile.work_date_fields)
        .map(|raw| date_token(&raw).to_string())
        .filter(|token| !token.is_empty())
}

/// `03/16/2022 00:00:00` → `Wed 03/16/2022`.
pub fn format_work_date(raw: Option<&str>) -> FieldValue {
    match raw.filter(|s| !s.trim().is_empty()) {
        None => FieldValue::Empty,
        Some(raw) => match parse_portal_date(raw) {
            Some(d) => FieldValue::Formatted(weekday_date(d)),
            None => FieldValue::Fallback(raw.to_string()),
        },
    }
}

/// `03/16/2022 16:30:00` → `04:30 PM`.
pub fn format_clock(raw: Option<&str>) -> FieldValue {
    match raw.filter(|s| !s.trim().is_empty()) {
        None => FieldValue::Empty,
        Some(raw) => match parse_portal_datetime(raw) {
            Some(dt) => FieldValue::Formatted(clock_time(dt)),
            None => FieldValue::Fallback(raw.to_string()),
        },
    }
}

/// Missing numbers count as zero.
pub fn format_number(field: &NumberField, decimals: usize) -> FieldValue {
    match field {
        NumberField::Missing => FieldValue::Formatted(format_hours(0.0, decimals)),
        NumberField::Number(n) => FieldValue::Formatted(format_hours(*n, decimals)),
        NumberField::Invalid(raw) => FieldValue::Fallback(raw.clone()),
    }
}

pub fn format_text(value: Option<&Value>) -> FieldValue {
    match value {
        None => FieldValue::Empty,
        Some(Value::String(s)) if s.is_empty() => FieldValue::Empty,
        Some(Value::String(s)) => FieldValue::Formatted(s.clone()),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) => FieldValue::Formatted(format_hours(f, 2)),
            None => FieldValue::Fallback(n.to_string()),
        },
        Some(other) => FieldValue::Formatted(other.to_string()),
    }
}

/// First group whose number matches, trying `numbers` in order.
pub fn format_group(groups: &[GroupValue], numbers: &[i64], format: GroupFormat) -> FieldValue {
    let Some(group) = numbers
        .iter()
        .find_map(|n| groups.iter().find(|g| g.group_number == Some(*n)))
    else {
        return FieldValue::Empty;
    };

    let value = group.value.as_deref().unwrap_or("");
    let description = group.description.as_deref().unwrap_or("");

    let text = match format {
        GroupFormat::ValueWithDescription => format!("{value} [{description}]"),
        GroupFormat::Value => value.to_string(),
        GroupFormat::Description => description.to_string(),
    };

    if text.is_empty() {
        FieldValue::Empty
    } else {
        FieldValue::Formatted(text)
    }
}
