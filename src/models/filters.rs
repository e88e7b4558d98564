//! Report filters
//!
//! User-supplied bounds for a trial balance. Every bound is optional and
//! inclusive; an absent bound means "use the extremal value in the data".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::AccountNumber;

/// How a report should be rendered
///
/// The format never influences aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated rows, one per account
    Csv,
    /// HTML table with a header row
    Html,
    /// Terminal table
    Table,
    /// Pretty-printed JSON
    Json,
    /// Render nothing
    #[default]
    None,
}

impl OutputFormat {
    /// Parse an output format, case-insensitively
    ///
    /// Unknown names map to `None` so that a bad format disables rendering
    /// rather than failing the report.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "csv" => Self::Csv,
            "html" => Self::Html,
            "table" | "text" => Self::Table,
            "json" => Self::Json,
            _ => Self::None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Html => write!(f, "HTML"),
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "JSON"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Raw report filters as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default)]
    pub start_account: Option<AccountNumber>,
    #[serde(default)]
    pub end_account: Option<AccountNumber>,
    #[serde(default)]
    pub start_period: Option<NaiveDate>,
    #[serde(default)]
    pub end_period: Option<NaiveDate>,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Filters {
    /// Build filters from raw text input
    ///
    /// A bound that is missing, blank or unparseable is left unset (and
    /// logged) so the report falls back to the data's extremal value instead
    /// of failing.
    pub fn from_input(
        start_account: Option<&str>,
        end_account: Option<&str>,
        start_period: Option<&str>,
        end_period: Option<&str>,
        format: Option<&str>,
        date_format: &str,
    ) -> Self {
        Self {
            start_account: parse_account_bound("start account", start_account),
            end_account: parse_account_bound("end account", end_account),
            start_period: parse_period_bound("start period", start_period, date_format),
            end_period: parse_period_bound("end period", end_period, date_format),
            format: format.map(OutputFormat::parse).unwrap_or_default(),
        }
    }

    /// Whether no bound has been set
    pub fn is_unbounded(&self) -> bool {
        self.start_account.is_none()
            && self.end_account.is_none()
            && self.start_period.is_none()
            && self.end_period.is_none()
    }
}

fn parse_account_bound(name: &str, raw: Option<&str>) -> Option<AccountNumber> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match raw.parse() {
        Ok(number) => Some(number),
        Err(_) => {
            tracing::warn!(bound = name, value = raw, "ignoring invalid account bound");
            None
        }
    }
}

fn parse_period_bound(name: &str, raw: Option<&str>, date_format: &str) -> Option<NaiveDate> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match NaiveDate::parse_from_str(raw, date_format) {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::warn!(
                bound = name,
                value = raw,
                format = date_format,
                "ignoring invalid period bound"
            );
            None
        }
    }
}
