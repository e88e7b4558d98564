//! Reports module
//!
//! Holds the trial balance report and its renderings.

pub mod trial_balance;

pub use trial_balance::{BalanceRow, Report};
