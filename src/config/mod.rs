use crate::errors::{AppError, AppResult};
use crate::models::profile::{HISTORICAL, Profile};
use crate::utils::formatting::mask_secret;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Portal access. Credentials normally come from `.env`, not the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Cookie header captured by a browser login; skips the form login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_prefix: Option<String>,
    /// Element the capture tool waits for before reading the API response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timesheet_selector: Option<String>,
}

/// A channel is enabled by the mere presence of its setting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_smtp_server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_webhook_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_webhook_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Defaults to `<output_dir>/discrepancy_log.csv`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discrepancy_log: Option<String>,
    #[serde(default)]
    pub initial_scan: bool,
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
    #[serde(default)]
    pub portal: PortalConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// User-defined column profiles, in addition to the built-ins.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<Profile>,
}

fn default_output_dir() -> String {
    "timeCard".to_string()
}
fn default_profile() -> String {
    HISTORICAL.to_string()
}
fn default_fetch_timeout() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            profile: default_profile(),
            discrepancy_log: None,
            initial_scan: false,
            fetch_timeout_secs: default_fetch_timeout(),
            portal: PortalConfig::default(),
            notifications: NotificationConfig::default(),
            profiles: Vec::new(),
        }
    }
}

/// Non-empty values only; an empty variable counts as unset.
fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimecard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimecard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimecard.conf")
    }

    /// Load the config file (defaults when absent), then overlay `.env`
    /// and the process environment.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let _ = dotenvy::dotenv();

        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);
        let mut cfg = if path.exists() {
            Self::from_yaml(&fs::read_to_string(&path)?)?
        } else {
            Self::default()
        };

        cfg.apply_env(|key| env::var(key).ok());
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Overlay environment-style settings supplied by `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_empty(lookup(key));

        let portal = &mut self.portal;
        for (key, slot) in [
            ("NOVATIME_USERNAME", &mut portal.username),
            ("NOVATIME_PASSWORD", &mut portal.password),
            ("NOVATIME_SESSION_COOKIE", &mut portal.session_cookie),
            ("LOGIN_URL", &mut portal.login_url),
            ("API_URL", &mut portal.api_url),
            ("API_PREFIX", &mut portal.api_prefix),
            ("TIMESHEET_SELECTOR", &mut portal.timesheet_selector),
        ] {
            if let Some(v) = get(key) {
                *slot = Some(v);
            }
        }

        let notifications = &mut self.notifications;
        for (key, slot) in [
            ("EMAIL_SMTP_SERVER", &mut notifications.email_smtp_server),
            ("SLACK_WEBHOOK_URL", &mut notifications.slack_webhook_url),
            ("DISCORD_WEBHOOK_URL", &mut notifications.discord_webhook_url),
        ] {
            if let Some(v) = get(key) {
                *slot = Some(v);
            }
        }

        if let Some(v) = get("INITIAL_SCAN") {
            self.initial_scan = v.trim().eq_ignore_ascii_case("true");
        }
        if let Some(v) = get("RTIMECARD_OUTPUT_DIR") {
            self.output_dir = v;
        }
        if let Some(v) = get("RTIMECARD_PROFILE") {
            self.profile = v;
        }
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    pub fn discrepancy_log_path(&self) -> PathBuf {
        match &self.discrepancy_log {
            Some(p) => expand_tilde(p),
            None => self.output_path().join("discrepancy_log.csv"),
        }
    }

    /// Resolve the profile to use; `name` overrides the configured one.
    pub fn resolve_profile(&self, name: Option<&str>) -> AppResult<Profile> {
        Profile::resolve(name.unwrap_or(&self.profile), &self.profiles)
    }

    /// Copy safe to print: secrets keep only their first characters.
    pub fn masked(&self) -> Self {
        let mut cfg = self.clone();
        for secret in [
            &mut cfg.portal.password,
            &mut cfg.portal.session_cookie,
            &mut cfg.notifications.slack_webhook_url,
            &mut cfg.notifications.discord_webhook_url,
        ] {
            if let Some(s) = secret {
                *s = mask_secret(s);
            }
        }
        cfg
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write a default config file unless one already exists. Returns the
    /// path and whether it was created.
    pub fn init_file(path: Option<&Path>) -> AppResult<(PathBuf, bool)> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);
        if path.exists() {
            return Ok((path, false));
        }
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let yaml = Self::default().to_yaml()?;
        fs::write(&path, yaml).map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Ok((path, true))
    }
}
