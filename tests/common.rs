#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimecard::models::record::TimesheetRecord;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

pub fn rtc() -> Command {
    let mut cmd = cargo_bin_cmd!("rtimecard");
    for var in [
        "RTIMECARD_OUTPUT_DIR",
        "RTIMECARD_PROFILE",
        "RTIMECARD_LOG",
        "INITIAL_SCAN",
        "EMAIL_SMTP_SERVER",
        "SLACK_WEBHOOK_URL",
        "DISCORD_WEBHOOK_URL",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Config path inside `dir` that does not exist, so defaults apply.
pub fn no_config(dir: &Path) -> String {
    dir.join("absent.conf").to_string_lossy().to_string()
}

pub fn record(value: Value) -> TimesheetRecord {
    serde_json::from_value(value).expect("record json")
}

/// One punch in the `timesheetdetail` shape.
pub fn punch(date: &str, din: &str, dout: &str, total: f64) -> Value {
    json!({
        "dWorkDate": format!("{date} 00:00:00"),
        "dIn": format!("{date} {din}"),
        "dOut": format!("{date} {dout}"),
        "nWorkHours": total,
        "nDailyTotalHours": total,
        "cPayCodeDescription": "Regular",
        "GroupValueList": [
            { "iGroupNumber": 12, "cGroupValue": "4100", "cGroupValueDescription": "Nursing" },
            { "iGroupNumber": 3, "cGroupValue": "RN", "cGroupValueDescription": "Registered Nurse" },
            { "iGroupNumber": 1, "cGroupValue": "F01", "cGroupValueDescription": "Main Campus" }
        ]
    })
}

/// API document wrapping `records` in `DataList`.
pub fn document(records: Vec<Value>) -> Value {
    let count = records.len();
    json!({ "DataList": records, "TotalCount": count })
}

pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).expect("serialize")).expect("write json");
    path
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir");
    }
    fs::write(&path, content).expect("write file");
    path
}

/// Minimal 14-column timesheet CSV with the given (daily, total) pairs.
pub fn timesheet_csv(rows: &[(&str, &str)]) -> String {
    let mut out = String::from(
        "Date,Pay Code,In,Out,Reg,OT-1,OT-2,Daily Hours\u{a0}*,Shift Exp,Schedule,Total Hours\u{a0}*,Account,ActShortCode,Facility\n",
    );
    for (i, (daily, total)) in rows.iter().enumerate() {
        out.push_str(&format!(
            "Wed 03/{:02}/2022,Regular,08:00 AM,04:00 PM,8.00,0.00,0.00,{daily},,,{total},,,\n",
            16 + i
        ));
    }
    out
}
