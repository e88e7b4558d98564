//! Account model
//!
//! Represents an entry in the chart of accounts: a numeric account code and
//! its label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Numeric account code
///
/// Ordered numerically, so account 200 sorts after account 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(i64);

impl AccountNumber {
    pub const fn new(number: i64) -> Self {
        Self(number)
    }

    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for AccountNumber {
    fn from(number: i64) -> Self {
        Self(number)
    }
}

impl FromStr for AccountNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// An account in the chart of accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Account {
    /// Unique account code
    pub account: AccountNumber,

    /// Account label (e.g., "Cash", "Sales")
    pub label: String,
}

impl Account {
    pub fn new(account: i64, label: impl Into<String>) -> Self {
        Self {
            account: AccountNumber::new(account),
            label: label.into(),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.account, self.label)
    }
}
