//! Filter resolution
//!
//! Fills in missing filter bounds from the chart of accounts and the journal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Account, AccountNumber, Filters, JournalEntry, OutputFormat};

/// How default period bounds are derived when the user gives none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodDefaults {
    /// First and last entry of the journal as recorded (assumes chronological order)
    #[default]
    Sequence,
    /// Earliest and latest period found anywhere in the journal
    Scan,
}

/// Filters with every bound the data can supply filled in
///
/// A bound stays `None` only when the collection it defaults from is empty,
/// and an unset bound matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFilters {
    pub start_account: Option<AccountNumber>,
    pub end_account: Option<AccountNumber>,
    pub start_period: Option<NaiveDate>,
    pub end_period: Option<NaiveDate>,
    pub format: OutputFormat,
}

impl ResolvedFilters {
    /// Check whether an account code lies within the account bounds
    pub fn contains_account(&self, account: AccountNumber) -> bool {
        match (self.start_account, self.end_account) {
            (Some(start), Some(end)) => (start..=end).contains(&account),
            _ => false,
        }
    }

    /// Check whether a date lies within the period bounds
    pub fn contains_period(&self, period: NaiveDate) -> bool {
        match (self.start_period, self.end_period) {
            (Some(start), Some(end)) => (start..=end).contains(&period),
            _ => false,
        }
    }
}

/// Resolve raw filters against the data they will be applied to
pub fn resolve_filters(
    raw: &Filters,
    accounts: &[Account],
    entries: &[JournalEntry],
    period_defaults: PeriodDefaults,
) -> ResolvedFilters {
    let (first_period, last_period) = match period_defaults {
        PeriodDefaults::Sequence => (
            entries.first().map(|e| e.period),
            entries.last().map(|e| e.period),
        ),
        PeriodDefaults::Scan => (
            entries.iter().map(|e| e.period).min(),
            entries.iter().map(|e| e.period).max(),
        ),
    };

    ResolvedFilters {
        start_account: raw
            .start_account
            .or_else(|| accounts.iter().map(|a| a.account).min()),
        end_account: raw
            .end_account
            .or_else(|| accounts.iter().map(|a| a.account).max()),
        start_period: raw.start_period.or(first_period),
        end_period: raw.end_period.or(last_period),
        format: raw.format,
    }
}
