//! Journal entry model
//!
//! A single debit/credit recorded against one account on one date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::account::AccountNumber;
use super::money::Money;

/// A recorded journal entry
///
/// Entries are immutable facts; several entries may share an account and/or
/// a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct JournalEntry {
    /// Account the entry is posted to
    pub account: AccountNumber,

    /// Date of the entry
    pub period: NaiveDate,

    /// Debit amount (expected non-negative)
    #[serde(default)]
    pub debit: Money,

    /// Credit amount (expected non-negative)
    #[serde(default)]
    pub credit: Money,
}

impl JournalEntry {
    pub fn new(account: i64, period: NaiveDate, debit: Money, credit: Money) -> Self {
        Self {
            account: AccountNumber::new(account),
            period,
            debit,
            credit,
        }
    }

    /// Create a debit-only entry
    pub fn debit(account: i64, period: NaiveDate, amount: Money) -> Self {
        Self::new(account, period, amount, Money::zero())
    }

    /// Create a credit-only entry
    pub fn credit(account: i64, period: NaiveDate, amount: Money) -> Self {
        Self::new(account, period, Money::zero(), amount)
    }
}
