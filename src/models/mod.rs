//! Core data models
//!
//! The chart of accounts, journal entries, money amounts and the filters a
//! trial balance is computed under.

pub mod account;
pub mod filters;
pub mod journal;
pub mod money;

pub use account::{Account, AccountNumber};
pub use filters::{Filters, OutputFormat};
pub use journal::JournalEntry;
pub use money::{Money, MoneyParseError};
