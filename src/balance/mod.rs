//! Balance aggregation engine
//!
//! Computes a trial balance in three pure stages:
//!
//! - `resolver`: fill in missing filter bounds from the data
//! - `aggregator`: filter entries and fold them per account
//! - `assembler`: label, sort and total the rows
//!
//! Each run is a function of its arguments only; calling it twice with the
//! same snapshot yields the same report.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use trial_balance::balance::compute_balance_report;
//! use trial_balance::models::{Account, Filters, JournalEntry, Money};
//!
//! let accounts = vec![Account::new(1, "Cash"), Account::new(2, "Sales")];
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let entries = vec![
//!     JournalEntry::debit(1, day, Money::from_units(100)),
//!     JournalEntry::credit(2, day, Money::from_units(100)),
//! ];
//!
//! let report = compute_balance_report(&accounts, &entries, &Filters::default()).unwrap();
//! assert_eq!(report.balance.len(), 2);
//! assert_eq!(report.total_debit, report.total_credit);
//! ```

pub mod aggregator;
pub mod assembler;
pub mod resolver;

pub use aggregator::{aggregate_entries, AccountTotals, Aggregation};
pub use assembler::assemble_report;
pub use resolver::{resolve_filters, PeriodDefaults, ResolvedFilters};

use crate::error::LedgerResult;
use crate::models::{Account, Filters, JournalEntry};
use crate::reports::Report;

/// Compute a trial balance with the default period strategy
pub fn compute_balance_report(
    accounts: &[Account],
    entries: &[JournalEntry],
    raw: &Filters,
) -> LedgerResult<Report> {
    compute_balance_report_with(accounts, entries, raw, PeriodDefaults::default())
}

/// Compute a trial balance, choosing how default periods are derived
pub fn compute_balance_report_with(
    accounts: &[Account],
    entries: &[JournalEntry],
    raw: &Filters,
    period_defaults: PeriodDefaults,
) -> LedgerResult<Report> {
    let resolved = resolve_filters(raw, accounts, entries, period_defaults);
    tracing::debug!(
        start_account = ?resolved.start_account,
        end_account = ?resolved.end_account,
        start_period = ?resolved.start_period,
        end_period = ?resolved.end_period,
        "resolved report filters"
    );

    let aggregation = aggregate_entries(&resolved, accounts, entries)?;
    let report = assemble_report(aggregation)?;

    tracing::debug!(
        rows = report.balance.len(),
        total_debit = %report.total_debit,
        total_credit = %report.total_credit,
        "assembled trial balance"
    );

    Ok(report)
}
