//! Timesheet retrieval and the fetch → transform → save run.

use crate::config::PortalConfig;
use crate::core::period::PayPeriod;
use crate::core::transform::transform;
use crate::errors::{AppError, AppResult};
use crate::export::{write_pretty_json, write_timesheet_csv};
use crate::models::profile::Profile;
use crate::models::record::{TimesheetRecord, TimesheetResponse};
use crate::models::row::TransformOutput;
use crate::ui::messages::warning;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, COOKIE};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const JSON_FILE_NAME: &str = "timesheet.json";
pub const CSV_FILE_NAME: &str = "timesheet.csv";

/// Source of the raw timesheet JSON body.
pub trait Fetcher {
    fn fetch(&self) -> AppResult<String>;
}

/// Reads a response body captured earlier, e.g. by a browser session.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Fetcher for FileFetcher {
    fn fetch(&self) -> AppResult<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Blocking HTTP fetch with a fixed timeout and no retry.
pub struct HttpFetcher {
    client: Client,
    portal: PortalConfig,
}

impl HttpFetcher {
    pub fn new(portal: &PortalConfig, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            portal: portal.clone(),
        })
    }

    /// Form login; the session cookie lands in the client's cookie store.
    fn login(&self) -> AppResult<()> {
        let (Some(url), Some(user), Some(pass)) = (
            self.portal.login_url.as_deref(),
            self.portal.username.as_deref(),
            self.portal.password.as_deref(),
        ) else {
            return Err(AppError::Auth(
                "set NOVATIME_SESSION_COOKIE, or LOGIN_URL with NOVATIME_USERNAME and NOVATIME_PASSWORD"
                    .to_string(),
            ));
        };

        tracing::debug!(url, "logging in");
        let resp = self
            .client
            .post(url)
            .form(&[("txtUserName", user), ("txtPassword", pass)])
            .send()?;

        if !resp.status().is_success() {
            return Err(AppError::Auth(format!("login returned {}", resp.status())));
        }
        Ok(())
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self) -> AppResult<String> {
        let api_url = self
            .portal
            .api_url
            .as_deref()
            .ok_or_else(|| AppError::Config("API_URL is not set".to_string()))?;

        let mut request = self.client.get(api_url).header(ACCEPT, "application/json");
        match self.portal.session_cookie.as_deref() {
            Some(cookie) => request = request.header(COOKIE, cookie),
            None => self.login()?,
        }

        tracing::debug!(url = api_url, "fetching timesheet");
        let resp = request.send()?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AppError::Auth(format!("{api_url} returned {status}")));
        }
        if !status.is_success() {
            return Err(AppError::Fetch(format!("{api_url} returned {status}")));
        }

        if let Some(prefix) = self.portal.api_prefix.as_deref()
            && !resp.url().as_str().contains(prefix)
        {
            warning(format!(
                "Response URL {} does not match API_PREFIX {prefix}",
                resp.url()
            ));
        }

        Ok(resp.text()?)
    }
}

/// `DataList` records of an API document. A missing or null list is empty.
pub fn parse_records(document: &Value) -> AppResult<Vec<TimesheetRecord>> {
    Ok(TimesheetResponse::deserialize(document)?.into_records())
}

#[derive(Debug)]
pub enum FetchOutcome {
    Saved {
        folder: PathBuf,
        json_path: PathBuf,
        csv_path: PathBuf,
        output: TransformOutput,
    },
    /// No pay period or work dates in the response; nothing written.
    NoData,
}

pub struct FetchLogic;

impl FetchLogic {
    /// Fetch, then save `timesheet.json` and `timesheet.csv` under
    /// `<output_dir>/<period folder>/`. Any fetch or parse failure aborts
    /// before a file is written.
    pub fn run(
        fetcher: &dyn Fetcher,
        output_dir: &Path,
        profile: &Profile,
    ) -> AppResult<FetchOutcome> {
        let body = fetcher.fetch()?;
        let document: Value = serde_json::from_str(&body)?;
        let records = parse_records(&document)?;
        tracing::debug!(records = records.len(), "timesheet parsed");

        let Some(period) = PayPeriod::resolve(&records) else {
            return Ok(FetchOutcome::NoData);
        };

        let folder = output_dir.join(period.folder_name());
        fs::create_dir_all(&folder)?;

        let json_path = folder.join(JSON_FILE_NAME);
        write_pretty_json(&json_path, &document)?;

        let output = transform(&records, profile);
        let csv_path = folder.join(CSV_FILE_NAME);
        write_timesheet_csv(&csv_path, &output)?;

        Ok(FetchOutcome::Saved {
            folder,
            json_path,
            csv_path,
            output,
        })
    }

    /// Offline conversion of a saved API document.
    pub fn convert(input: &Path, output_csv: &Path, profile: &Profile) -> AppResult<TransformOutput> {
        let body = FileFetcher::new(input).fetch()?;
        let document: Value = serde_json::from_str(&body)?;
        let records = parse_records(&document)?;

        let output = transform(&records, profile);
        write_timesheet_csv(output_csv, &output)?;
        Ok(output)
    }
}
