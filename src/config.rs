//! Report configuration
//!
//! Settings for the report binary, read from the environment.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::tools::{ReportError, ReportResult};

pub const ENV_SNAPSHOT_PATH: &str = "VITATRACK_SNAPSHOT_PATH";
pub const ENV_REPORT_DATE: &str = "VITATRACK_REPORT_DATE";
pub const ENV_INCLUDE_UNTRACKED: &str = "VITATRACK_INCLUDE_UNTRACKED";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub snapshot_path: PathBuf,
    /// None means today
    pub report_date: Option<NaiveDate>,
    /// Also list nutrients with no intake at all as missing
    pub include_untracked: bool,
}

impl ReportConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> ReportResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ReportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let snapshot_path = lookup(ENV_SNAPSHOT_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(default_snapshot_path);

        let report_date = lookup(ENV_REPORT_DATE)
            .filter(|s| !s.trim().is_empty())
            .map(|s| parse_date(&s))
            .transpose()?;

        let include_untracked = match lookup(ENV_INCLUDE_UNTRACKED) {
            Some(value) => parse_bool(ENV_INCLUDE_UNTRACKED, &value)?,
            None => false,
        };

        Ok(Self {
            snapshot_path,
            report_date,
            include_untracked,
        })
    }

    pub fn report_date_or_today(&self) -> NaiveDate {
        self.report_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Default snapshot location: data/snapshot.json in the project root
fn default_snapshot_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(parent) = path.parent() {
            if let Some(grandparent) = parent.parent() {
                path = grandparent.to_path_buf();
            }
        }
    }

    path.push("data");
    path.push("snapshot.json");
    path
}

/// Parse an ISO date (YYYY-MM-DD)
pub fn parse_date(s: &str) -> ReportResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ReportError::InvalidDate(s.to_string()))
}

fn parse_bool(name: &str, value: &str) -> ReportResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ReportError::InvalidSetting {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
