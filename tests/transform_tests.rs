mod common;

use common::{punch, record};
use rtimecard::core::transform::{format_clock, format_number, format_text, format_work_date, transform};
use rtimecard::models::profile::{DAILY_HOURS_HEADER, Profile, TOTAL_HOURS_HEADER};
use rtimecard::models::record::NumberField;
use rtimecard::models::row::FieldValue;
use serde_json::json;

#[test]
fn test_single_punch_matches_reference_row() {
    let rec = record(json!({
        "dWorkDate": "03/16/2022 00:00:00",
        "dIn": "03/16/2022 08:00:00",
        "dOut": "03/16/2022 16:30:00",
        "nWorkHours": 8.0,
        "nOT1Pay": 0.5,
        "nDailyTotalHours": 8.5
    }));

    let out = transform(&[rec], &Profile::historical());

    assert_eq!(out.rows.len(), 1);
    assert_eq!(out.value(0, "Date"), "Wed 03/16/2022");
    assert_eq!(out.value(0, "In"), "08:00 AM");
    assert_eq!(out.value(0, "Out"), "04:30 PM");
    assert_eq!(out.value(0, "Reg"), "8.00");
    assert_eq!(out.value(0, "OT-1"), "0.50");
    assert_eq!(out.value(0, "OT-2"), "0.00");
    assert_eq!(out.value(0, DAILY_HOURS_HEADER), "8.5");
    assert_eq!(out.value(0, TOTAL_HOURS_HEADER), "8.5");
    assert!(out.fallbacks.is_empty());
}

#[test]
fn test_missing_work_date_gives_empty_date() {
    let rec = record(json!({ "dWorkDate": null, "nDailyTotalHours": 2.0 }));

    let out = transform(&[rec], &Profile::historical());

    assert_eq!(out.rows.len(), 1);
    assert_eq!(out.value(0, "Date"), "");
    assert_eq!(out.value(0, "In"), "");
    assert_eq!(out.value(0, DAILY_HOURS_HEADER), "");
    assert_eq!(out.value(0, TOTAL_HOURS_HEADER), "2.0");
    assert_eq!(format_work_date(None), FieldValue::Empty);
}

#[test]
fn test_daily_hours_only_on_last_punch_of_each_day() {
    let records = vec![
        record(punch("03/16/2022", "10:30:00", "12:00:00", 1.5)),
        record(punch("03/17/2022", "08:00:00", "12:00:00", 4.0)),
        record(punch("03/16/2022", "13:00:00", "16:30:00", 3.5)),
        record(punch("03/16/2022", "08:00:00", "10:00:00", 2.0)),
        record(punch("03/17/2022", "12:30:00", "17:00:00", 4.5)),
    ];

    let out = transform(&records, &Profile::historical());

    // one row per punch, never merged
    assert_eq!(out.rows.len(), records.len());

    let ins: Vec<&str> = (0..5).map(|i| out.value(i, "In")).collect();
    assert_eq!(
        ins,
        ["08:00 AM", "10:30 AM", "01:00 PM", "08:00 AM", "12:30 PM"]
    );

    let daily: Vec<&str> = (0..5).map(|i| out.value(i, DAILY_HOURS_HEADER)).collect();
    assert_eq!(daily, ["", "", "7.0", "", "8.5"]);

    let totals: Vec<&str> = (0..5).map(|i| out.value(i, TOTAL_HOURS_HEADER)).collect();
    assert_eq!(totals, ["2.0", "1.5", "3.5", "4.0", "4.5"]);
}

#[test]
fn test_punch_without_clock_out_sorts_before_punches_of_same_day() {
    let mut open = punch("03/16/2022", "18:00:00", "00:00:00", 1.0);
    open["dOut"] = json!(null);
    let records = vec![record(punch("03/16/2022", "08:00:00", "12:00:00", 4.0)), record(open)];

    let out = transform(&records, &Profile::historical());

    assert_eq!(out.value(0, "In"), "06:00 PM");
    assert_eq!(out.value(0, "Out"), "");
    assert_eq!(out.value(0, DAILY_HOURS_HEADER), "");
    assert_eq!(out.value(1, DAILY_HOURS_HEADER), "5.0");
}

#[test]
fn test_unparseable_fields_pass_through_raw() {
    let records = vec![
        record(punch("03/16/2022", "08:00:00", "12:00:00", 4.0)),
        record(json!({
            "dWorkDate": "not a date",
            "dIn": "8am",
            "nWorkHours": "eight",
            "nDailyTotalHours": 1.0
        })),
    ];

    let out = transform(&records, &Profile::historical());

    // unparseable date sorts to the front
    assert_eq!(out.value(0, "Date"), "not a date");
    assert_eq!(out.value(0, "In"), "8am");
    assert_eq!(out.value(0, "Reg"), "eight");
    assert_eq!(out.value(1, "Date"), "Wed 03/16/2022");

    let columns: Vec<&str> = out.fallbacks.iter().map(|f| f.column.as_str()).collect();
    assert_eq!(columns, ["Date", "In", "Reg"]);
    assert!(out.fallbacks.iter().all(|f| f.row == 0));
}

#[test]
fn test_empty_input_still_has_header() {
    let out = transform(&[], &Profile::historical());

    assert!(out.rows.is_empty());
    assert_eq!(out.header.len(), 20);
    assert_eq!(out.header[3], "");
    assert_eq!(out.header[9], "Daily Hours\u{a0}*");
    assert_eq!(out.header[12], "Total Hours\u{a0}*");

    let current = transform(&[], &Profile::current());
    assert_eq!(current.header.len(), 14);
    assert!(current.header.iter().all(|h| !h.is_empty()));
}

#[test]
fn test_historical_group_lookup() {
    let mut rec = punch("03/16/2022", "08:00:00", "12:00:00", 4.0);
    let out = transform(&[record(rec.clone())], &Profile::historical());

    assert_eq!(out.value(0, "Account"), "4100 [Nursing]");
    assert_eq!(out.value(0, "ActShortCode"), "RN [Registered Nurse]");
    assert_eq!(out.value(0, "Facility"), "F01 [Main Campus]");

    rec["GroupValueList"] = json!([{ "iGroupNumber": 99, "cGroupValue": "X" }]);
    let out = transform(&[record(rec)], &Profile::historical());
    assert_eq!(out.value(0, "Account"), "");
    assert_eq!(out.value(0, "Facility"), "");
}

#[test]
fn test_current_profile_columns() {
    let records = vec![
        record(json!({
            "dWorkDate": "03/16/2022 00:00:00",
            "dIn": "03/16/2022 07:00:00",
            "dOut": "03/16/2022 11:00:00",
            "nWorkHours": 4.0,
            "nOT1Hours": 0.25,
            "nWeeklyHours": 4.0,
            "cShiftExpression": "DAY",
            "cSchedule": "07:00-15:30",
            "GroupingList": [
                { "iGroupNumber": 16, "cGroupValue": "W", "cGroupValueDescription": "West Wing" }
            ],
            "GroupValueList": [
                { "iGroupNumber": 3, "cGroupValue": "ICU", "cGroupValueDescription": "Intensive Care" },
                { "iGroupNumber": 17, "cGroupValue": "H", "cGroupValueDescription": "Hospital" }
            ]
        })),
        record(json!({
            "dWorkDate": "03/16/2022 00:00:00",
            "dIn": "03/16/2022 11:30:00",
            "dOut": "03/16/2022 15:30:00",
            "nWorkHours": 4.0,
            "nWeeklyHours": 8.0,
            "GroupingList": [
                { "iGroupNumber": 16, "cGroupValue": "W", "cGroupValueDescription": "West Wing" }
            ]
        })),
    ];

    let out = transform(&records, &Profile::current());

    assert_eq!(out.header.len(), 14);
    assert_eq!(out.value(0, "OT-1"), "0.25");
    assert_eq!(out.value(0, "Shift Exp"), "DAY");
    assert_eq!(out.value(0, "Schedule"), "07:00-15:30");
    assert_eq!(out.value(0, "Account"), "Intensive Care");
    assert_eq!(out.value(0, "ActShortCode"), "ICU");
    // 17 takes precedence over 16
    assert_eq!(out.value(0, "Facility"), "Hospital");
    assert_eq!(out.value(1, "Facility"), "West Wing");

    assert_eq!(out.value(0, TOTAL_HOURS_HEADER), "4.0");
    assert_eq!(out.value(1, TOTAL_HOURS_HEADER), "8.0");
    assert_eq!(out.value(0, DAILY_HOURS_HEADER), "");
    assert_eq!(out.value(1, DAILY_HOURS_HEADER), "8.0");
}

#[test]
fn test_field_formatters() {
    assert_eq!(
        format_clock(Some("03/16/2022 00:15:00")),
        FieldValue::Formatted("12:15 AM".to_string())
    );
    assert_eq!(format_clock(Some("16:30")), FieldValue::Fallback("16:30".to_string()));
    assert!(!format_clock(Some("16:30")).is_valid());
    assert_eq!(format_clock(None), FieldValue::Empty);

    assert_eq!(
        format_number(&NumberField::Missing, 2),
        FieldValue::Formatted("0.00".to_string())
    );
    assert_eq!(
        format_number(&NumberField::Number(7.26), 1),
        FieldValue::Formatted("7.3".to_string())
    );

    assert_eq!(
        format_text(Some(&json!(7.5))),
        FieldValue::Formatted("7.50".to_string())
    );
    assert_eq!(format_text(Some(&json!(""))), FieldValue::Empty);
    assert_eq!(format_text(None).into_cell(), "");
}

#[test]
fn test_numeric_strings_are_accepted() {
    let rec = record(json!({
        "dWorkDate": "03/16/2022 00:00:00",
        "nWorkHours": "7.25",
        "nDailyTotalHours": "7.74"
    }));

    let out = transform(&[rec], &Profile::historical());

    assert_eq!(out.value(0, "Reg"), "7.25");
    assert_eq!(out.value(0, TOTAL_HOURS_HEADER), "7.7");
    assert!(out.fallbacks.is_empty());
}

#[test]
fn test_blank_clock_values_are_empty_not_fallbacks() {
    let mut rec = punch("03/16/2022", "08:00:00", "12:00:00", 4.0);
    rec["dIn"] = json!("");
    rec["dOut"] = json!("  ");

    let out = transform(&[record(rec)], &Profile::historical());

    assert_eq!(out.value(0, "In"), "");
    assert_eq!(out.value(0, "Out"), "");
    assert!(out.fallbacks.is_empty());
    assert_eq!(format_clock(Some("")), FieldValue::Empty);
    assert_eq!(format_work_date(Some(" ")), FieldValue::Empty);
}

#[test]
fn test_unparseable_clock_out_sorts_first_and_loses_daily() {
    let mut broken = punch("03/16/2022", "13:00:00", "00:00:00", 2.0);
    broken["dOut"] = json!("n/a");
    let records = vec![
        record(punch("03/16/2022", "08:00:00", "12:00:00", 4.0)),
        record(broken),
    ];

    let out = transform(&records, &Profile::historical());

    assert_eq!(out.value(0, "In"), "01:00 PM");
    assert_eq!(out.value(0, "Out"), "n/a");
    assert_eq!(out.value(0, DAILY_HOURS_HEADER), "");
    assert_eq!(out.value(1, "In"), "08:00 AM");
    assert_eq!(out.value(1, DAILY_HOURS_HEADER), "6.0");

    assert_eq!(out.fallbacks.len(), 1);
    assert_eq!(out.fallbacks[0].row, 0);
    assert_eq!(out.fallbacks[0].column, "Out");
}
