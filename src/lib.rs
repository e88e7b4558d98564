//! trial-balance - ledger trial balance reports
//!
//! This library computes trial balances from a chart of accounts and a
//! journal of debit/credit entries, filtered by account and period range.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `balance`: the aggregation engine (filter resolution, folding, assembly)
//! - `reports`: the report value and its CSV/HTML/terminal/JSON renderings
//! - `models`: accounts, journal entries, money and filters
//! - `storage`: read-only loading of ledger snapshots (JSON or CSV)
//! - `config`: configuration and path management
//! - `error`: custom error types
//! - `logging`: tracing subscriber setup
//! - `cli`: command handlers for the `trialbal` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use trial_balance::balance::compute_balance_report;
//! use trial_balance::models::Filters;
//! use trial_balance::storage::Ledger;
//!
//! let ledger = Ledger::from_csv_files(accounts, journal, "%Y-%m-%d")?;
//! let report = compute_balance_report(&ledger.accounts, &ledger.entries, &Filters::default())?;
//! ```

pub mod balance;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use balance::compute_balance_report;
pub use error::{LedgerError, LedgerResult};
pub use reports::{BalanceRow, Report};
