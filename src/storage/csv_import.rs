//! CSV import for the chart of accounts and the journal
//!
//! Accounts: `ACCOUNT,LABEL`. Journal: `ACCOUNT,PERIOD,DEBIT,CREDIT` with
//! decimal amounts. Upper- and lower-case header names are both accepted; a
//! row that does not parse is reported with its line number.

use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountNumber, JournalEntry, Money};

#[derive(Debug, Deserialize)]
struct AccountRecord {
    #[serde(rename = "ACCOUNT", alias = "account")]
    account: String,
    #[serde(rename = "LABEL", alias = "label")]
    label: String,
}

#[derive(Debug, Deserialize)]
struct JournalRecord {
    #[serde(rename = "ACCOUNT", alias = "account")]
    account: String,
    #[serde(rename = "PERIOD", alias = "period")]
    period: String,
    #[serde(rename = "DEBIT", alias = "debit", default)]
    debit: String,
    #[serde(rename = "CREDIT", alias = "credit", default)]
    credit: String,
}

/// Read a chart of accounts from CSV
pub fn read_accounts_csv<R: Read>(reader: R) -> LedgerResult<Vec<Account>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut accounts = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = line_of(&record);
        let row: AccountRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| LedgerError::import(line, e.to_string()))?;

        accounts.push(Account {
            account: parse_account(&row.account, line)?,
            label: row.label,
        });
    }

    Ok(accounts)
}

/// Read journal entries from CSV, keeping their recorded order
///
/// Empty amount cells count as zero.
pub fn read_journal_csv<R: Read>(reader: R, date_format: &str) -> LedgerResult<Vec<JournalEntry>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut entries = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = line_of(&record);
        let row: JournalRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| LedgerError::import(line, e.to_string()))?;

        let period = NaiveDate::parse_from_str(&row.period, date_format).map_err(|_| {
            LedgerError::import(
                line,
                format!("invalid PERIOD '{}', expected format {}", row.period, date_format),
            )
        })?;

        entries.push(JournalEntry {
            account: parse_account(&row.account, line)?,
            period,
            debit: parse_amount("DEBIT", &row.debit, line)?,
            credit: parse_amount("CREDIT", &row.credit, line)?,
        });
    }

    Ok(entries)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn parse_account(raw: &str, line: u64) -> LedgerResult<AccountNumber> {
    raw.parse()
        .map_err(|_| LedgerError::import(line, format!("invalid ACCOUNT '{}'", raw)))
}

fn parse_amount(column: &str, raw: &str, line: u64) -> LedgerResult<Money> {
    if raw.is_empty() {
        return Ok(Money::zero());
    }
    Money::parse(raw).map_err(|e| LedgerError::import(line, format!("{}: {}", column, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_accounts() {
        let csv = "ACCOUNT,LABEL\n1000,Cash\n4000, Sales revenue \n";
        let accounts = read_accounts_csv(csv.as_bytes()).unwrap();

        assert_eq!(
            accounts,
            vec![Account::new(1000, "Cash"), Account::new(4000, "Sales revenue")]
        );
    }

    #[test]
    fn test_read_accounts_lowercase_headers() {
        let csv = "account,label\n1,Cash\n";
        let accounts = read_accounts_csv(csv.as_bytes()).unwrap();
        assert_eq!(accounts, vec![Account::new(1, "Cash")]);
    }

    #[test]
    fn test_read_journal() {
        let csv = "ACCOUNT,PERIOD,DEBIT,CREDIT\n\
                   1,2024-01-01,100,0\n\
                   2,2024-01-02,,100.50\n";
        let entries = read_journal_csv(csv.as_bytes(), "%Y-%m-%d").unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].debit, Money::from_units(100));
        assert_eq!(entries[1].debit, Money::zero());
        assert_eq!(entries[1].credit, Money::from_cents(10050));
        assert_eq!(entries[1].period, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_bad_amount_reports_line() {
        let csv = "ACCOUNT,PERIOD,DEBIT,CREDIT\n\
                   1,2024-01-01,100,0\n\
                   1,2024-01-02,ten,0\n";
        let err = read_journal_csv(csv.as_bytes(), "%Y-%m-%d").unwrap_err();

        match err {
            LedgerError::Import { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("DEBIT"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extra_decimal_places_report_line() {
        let csv = "ACCOUNT,PERIOD,DEBIT,CREDIT\n1,2024-01-01,0,10.999\n";
        let err = read_journal_csv(csv.as_bytes(), "%Y-%m-%d").unwrap_err();

        match err {
            LedgerError::Import { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("CREDIT"));
                assert!(message.contains("10.999"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_date_reports_line() {
        let csv = "ACCOUNT,PERIOD,DEBIT,CREDIT\n1,01/02/2024,1,0\n";
        let err = read_journal_csv(csv.as_bytes(), "%Y-%m-%d").unwrap_err();
        assert!(matches!(err, LedgerError::Import { line: 2, .. }));
    }

    #[test]
    fn test_bad_account_number() {
        let csv = "ACCOUNT,LABEL\ncash,Cash\n";
        let err = read_accounts_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid ACCOUNT 'cash'"));
    }
}
