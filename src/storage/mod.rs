//! Ledger snapshot loading
//!
//! Reads the chart of accounts and the journal either from the JSON files in
//! the data directory or from a pair of CSV files. Loading is read-only; the
//! engine only ever sees an immutable snapshot.

pub mod csv_import;
pub mod file_io;

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, JournalEntry};

pub use csv_import::{read_accounts_csv, read_journal_csv};
pub use file_io::read_json;

/// On-disk shape of accounts.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AccountData {
    accounts: Vec<Account>,
}

/// On-disk shape of journal.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct JournalData {
    entries: Vec<JournalEntry>,
}

/// A snapshot of the chart of accounts and the journal
///
/// Accounts are kept in ascending account order; entries keep the order in
/// which they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    pub accounts: Vec<Account>,
    pub entries: Vec<JournalEntry>,
}

impl Ledger {
    pub fn new(mut accounts: Vec<Account>, entries: Vec<JournalEntry>) -> Self {
        accounts.sort_by_key(|a| a.account);
        Self { accounts, entries }
    }

    /// Load the JSON snapshot from the data directory
    ///
    /// A missing file reads as an empty collection.
    pub fn load(paths: &LedgerPaths) -> LedgerResult<Self> {
        let accounts: AccountData = read_json(paths.accounts_file())?;
        let journal: JournalData = read_json(paths.journal_file())?;

        let ledger = Self::new(accounts.accounts, journal.entries);
        tracing::info!(
            accounts = ledger.accounts.len(),
            entries = ledger.entries.len(),
            dir = %paths.data_dir().display(),
            "loaded ledger snapshot"
        );
        Ok(ledger)
    }

    /// Load the snapshot from CSV files
    pub fn from_csv_files(
        accounts_csv: &Path,
        journal_csv: &Path,
        date_format: &str,
    ) -> LedgerResult<Self> {
        let accounts = read_accounts_csv(open(accounts_csv)?)?;
        let entries = read_journal_csv(open(journal_csv)?, date_format)?;

        let ledger = Self::new(accounts, entries);
        tracing::info!(
            accounts = ledger.accounts.len(),
            entries = ledger.entries.len(),
            "imported ledger from CSV"
        );
        Ok(ledger)
    }

    /// Check the snapshot against the engine's data contract
    ///
    /// Account codes must be unique and every entry must reference a known
    /// account. Amounts are not checked.
    pub fn validate(&self) -> LedgerResult<()> {
        let mut known = HashSet::with_capacity(self.accounts.len());
        for account in &self.accounts {
            if !known.insert(account.account) {
                return Err(LedgerError::Validation(format!(
                    "duplicate account {} in chart of accounts",
                    account.account
                )));
            }
        }

        let dangling: Vec<String> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !known.contains(&e.account))
            .map(|(i, e)| format!("#{} (account {})", i + 1, e.account))
            .collect();

        if !dangling.is_empty() {
            return Err(LedgerError::Validation(format!(
                "journal entries reference unknown accounts: {}",
                dangling.join(", ")
            )));
        }

        Ok(())
    }
}

fn open(path: &Path) -> LedgerResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))
}
