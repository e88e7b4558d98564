//! CLI command handlers
//!
//! Bridges clap argument parsing with the balance engine and the report
//! renderers.

pub mod report;

pub use report::{handle_check_command, handle_report_command, LedgerSource, ReportArgs};
