use rtimecard::config::Config;
use rtimecard::errors::AppError;
use rtimecard::models::profile::{ColumnRule, GroupFormat};
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::tempdir;

fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.output_dir, "timeCard");
    assert_eq!(cfg.profile, "historical");
    assert!(!cfg.initial_scan);
    assert_eq!(cfg.fetch_timeout_secs, 60);
    assert_eq!(
        cfg.discrepancy_log_path(),
        PathBuf::from("timeCard").join("discrepancy_log.csv")
    );
}

#[test]
fn test_environment_overrides_file_values() {
    let mut cfg = Config::from_yaml("output_dir: reports\nportal:\n  username: file-user\n").unwrap();
    let env = env_of(&[
        ("NOVATIME_USERNAME", "jdoe"),
        ("NOVATIME_PASSWORD", "hunter22"),
        ("API_URL", "https://portal.example/api/timesheet"),
        ("SLACK_WEBHOOK_URL", "https://hooks.example/T0/B0"),
        ("RTIMECARD_PROFILE", "current"),
        ("API_PREFIX", ""),
        ("TIMESHEET_SELECTOR", "#timesheetGrid"),
    ]);

    cfg.apply_env(|k| env.get(k).cloned());

    assert_eq!(cfg.output_dir, "reports");
    assert_eq!(cfg.profile, "current");
    assert_eq!(cfg.portal.username.as_deref(), Some("jdoe"));
    assert_eq!(cfg.portal.password.as_deref(), Some("hunter22"));
    assert_eq!(
        cfg.portal.api_url.as_deref(),
        Some("https://portal.example/api/timesheet")
    );
    // empty values count as unset
    assert_eq!(cfg.portal.api_prefix, None);
    assert_eq!(cfg.portal.timesheet_selector.as_deref(), Some("#timesheetGrid"));
    assert!(cfg.notifications.slack_webhook_url.is_some());
    assert!(cfg.notifications.discord_webhook_url.is_none());
}

#[test]
fn test_initial_scan_flag_is_case_insensitive() {
    for (raw, expected) in [("true", true), ("TRUE", true), ("True ", true), ("yes", false), ("0", false)] {
        let mut cfg = Config::default();
        cfg.initial_scan = !expected;
        cfg.apply_env(|k| (k == "INITIAL_SCAN").then(|| raw.to_string()));
        assert_eq!(cfg.initial_scan, expected, "INITIAL_SCAN={raw}");
    }
}

#[test]
fn test_masked_hides_secrets_only() {
    let mut cfg = Config::default();
    let env = env_of(&[
        ("NOVATIME_USERNAME", "jdoe"),
        ("NOVATIME_PASSWORD", "hunter22"),
        ("DISCORD_WEBHOOK_URL", "https://discord.example/api/webhooks/1"),
    ]);
    cfg.apply_env(|k| env.get(k).cloned());

    let masked = cfg.masked();

    assert_eq!(masked.portal.username.as_deref(), Some("jdoe"));
    assert_eq!(masked.portal.password.as_deref(), Some("hu******"));
    assert_eq!(
        masked.notifications.discord_webhook_url.as_deref(),
        Some("ht******")
    );
    assert!(!masked.to_yaml().unwrap().contains("hunter22"));
    assert_eq!(cfg.portal.password.as_deref(), Some("hunter22"));
}

#[test]
fn test_empty_file_gives_defaults() {
    let cfg = Config::from_yaml("  \n").unwrap();
    assert_eq!(cfg.output_dir, "timeCard");
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let err = Config::from_yaml("output_dir: [unclosed").unwrap_err();
    assert!(matches!(err, AppError::ConfigParse(_)));
}

#[test]
fn test_custom_profile_from_yaml() {
    let yaml = r#"
profile: payroll
profiles:
  - name: payroll
    description: hours per department
    work_date_fields: [dWorkDate]
    out_time_field: dOut
    daily_sum_fields: [nWorkHours]
    punch_total_fields: [nTotalHours]
    group_lists: [GroupValueList]
    columns:
      - header: Date
        rule: work_date
      - header: ""
        rule: blank
      - header: Hours
        rule: hours
        fields: [nWorkHours]
      - header: Dept
        rule: group
        numbers: [12]
        format: value
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    let profile = cfg.resolve_profile(None).unwrap();
    assert_eq!(profile.name, "payroll");
    assert_eq!(profile.header(), ["Date", "", "Hours", "Dept"]);
    assert_eq!(
        profile.columns[3].rule,
        ColumnRule::Group {
            numbers: vec![12],
            format: GroupFormat::Value
        }
    );

    let builtin = cfg.resolve_profile(Some("CURRENT")).unwrap();
    assert_eq!(builtin.columns.len(), 14);
}

#[test]
fn test_unknown_profile() {
    let err = Config::default().resolve_profile(Some("weekly")).unwrap_err();
    match err {
        AppError::UnknownProfile(name) => assert_eq!(name, "weekly"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_init_file_does_not_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("conf").join("rtimecard.conf");

    let (written, created) = Config::init_file(Some(&path)).unwrap();
    assert_eq!(written, path);
    assert!(created);

    std::fs::write(&path, "output_dir: mine\n").unwrap();
    let (_, created) = Config::init_file(Some(&path)).unwrap();
    assert!(!created);

    let cfg = Config::from_yaml(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(cfg.output_dir, "mine");
}

#[test]
fn test_default_file_round_trips() {
    let yaml = Config::default().to_yaml().unwrap();
    let cfg = Config::from_yaml(&yaml).unwrap();
    assert_eq!(cfg.profile, "historical");
    assert!(cfg.profiles.is_empty());
}
