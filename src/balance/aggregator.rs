//! Entry aggregation
//!
//! Filters journal entries by resolved bounds and folds them into one set of
//! totals per account.

use std::collections::HashMap;

use serde::Serialize;

use super::resolver::ResolvedFilters;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountNumber, JournalEntry, Money};

/// Running debit and credit totals for a single account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AccountTotals {
    pub debit: Money,
    pub credit: Money,
}

impl AccountTotals {
    /// Totals seeded from a first entry
    pub fn from_entry(entry: &JournalEntry) -> Self {
        Self {
            debit: entry.debit,
            credit: entry.credit,
        }
    }

    /// New totals with a further entry added in, or `None` on overflow
    #[must_use]
    pub fn absorb(self, entry: &JournalEntry) -> Option<Self> {
        Some(Self {
            debit: self.debit.checked_add(entry.debit)?,
            credit: self.credit.checked_add(entry.credit)?,
        })
    }

    /// Net balance: debit minus credit, or `None` on overflow
    pub fn balance(&self) -> Option<Money> {
        self.debit.checked_sub(self.credit)
    }
}

/// Result of folding the journal
///
/// `labels` holds every in-range account; `totals` only those with at least
/// one qualifying entry.
#[derive(Debug, Clone, Default)]
pub struct Aggregation<'a> {
    pub labels: HashMap<AccountNumber, &'a str>,
    pub totals: HashMap<AccountNumber, AccountTotals>,
}

impl Aggregation<'_> {
    /// True when no account has a qualifying entry
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Fold the journal into per-account totals under the resolved filters
///
/// Fails only when an account's running debit or credit overflows.
pub fn aggregate_entries<'a>(
    resolved: &ResolvedFilters,
    accounts: &'a [Account],
    entries: &[JournalEntry],
) -> LedgerResult<Aggregation<'a>> {
    let labels: HashMap<AccountNumber, &'a str> = accounts
        .iter()
        .filter(|a| resolved.contains_account(a.account))
        .map(|a| (a.account, a.label.as_str()))
        .collect();

    let totals = entries
        .iter()
        .filter(|e| labels.contains_key(&e.account) && resolved.contains_period(e.period))
        .try_fold(HashMap::new(), |mut totals, entry| {
            let next = match totals.get(&entry.account) {
                Some(current) => AccountTotals::absorb(*current, entry).ok_or_else(|| {
                    LedgerError::Overflow(format!("totals for account {}", entry.account))
                })?,
                None => AccountTotals::from_entry(entry),
            };
            totals.insert(entry.account, next);
            Ok::<_, LedgerError>(totals)
        })?;

    tracing::debug!(
        in_range_accounts = labels.len(),
        accounts_with_activity = totals.len(),
        "aggregated journal entries"
    );

    Ok(Aggregation { labels, totals })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutputFormat;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bounds(start: i64, end: i64, from: NaiveDate, to: NaiveDate) -> ResolvedFilters {
        ResolvedFilters {
            start_account: Some(AccountNumber::new(start)),
            end_account: Some(AccountNumber::new(end)),
            start_period: Some(from),
            end_period: Some(to),
            format: OutputFormat::None,
        }
    }

    fn accounts() -> Vec<Account> {
        vec![
            Account::new(1, "Cash"),
            Account::new(2, "Sales"),
            Account::new(3, "Rent"),
        ]
    }

    fn entries() -> Vec<JournalEntry> {
        vec![
            JournalEntry::debit(1, date(2024, 1, 1), Money::from_units(100)),
            JournalEntry::credit(2, date(2024, 1, 2), Money::from_units(100)),
            JournalEntry::debit(1, date(2024, 2, 1), Money::from_units(50)),
            JournalEntry::new(1, date(2024, 2, 3), Money::zero(), Money::from_units(30)),
        ]
    }

    #[test]
    fn test_folds_entries_per_account() {
        let accounts = accounts();
        let agg = aggregate_entries(
            &bounds(1, 3, date(2024, 1, 1), date(2024, 12, 31)),
            &accounts,
            &entries(),
        )
        .unwrap();

        let cash = agg.totals[&AccountNumber::new(1)];
        assert_eq!(cash.debit, Money::from_units(150));
        assert_eq!(cash.credit, Money::from_units(30));
        assert_eq!(cash.balance(), Some(Money::from_units(120)));

        let sales = agg.totals[&AccountNumber::new(2)];
        assert_eq!(sales.balance(), Some(Money::from_units(-100)));
    }

    #[test]
    fn test_untouched_accounts_have_no_totals() {
        let accounts = accounts();
        let agg = aggregate_entries(
            &bounds(1, 3, date(2024, 1, 1), date(2024, 12, 31)),
            &accounts,
            &entries(),
        )
        .unwrap();

        assert_eq!(agg.labels.len(), 3);
        assert_eq!(agg.labels[&AccountNumber::new(3)], "Rent");
        assert!(!agg.totals.contains_key(&AccountNumber::new(3)));
    }

    #[test]
    fn test_period_bounds_are_inclusive() {
        let accounts = accounts();
        let agg = aggregate_entries(
            &bounds(1, 3, date(2024, 1, 2), date(2024, 2, 1)),
            &accounts,
            &entries(),
        )
        .unwrap();

        assert_eq!(agg.totals[&AccountNumber::new(1)].debit, Money::from_units(50));
        assert_eq!(agg.totals[&AccountNumber::new(1)].credit, Money::zero());
        assert_eq!(agg.totals[&AccountNumber::new(2)].credit, Money::from_units(100));
    }

    #[test]
    fn test_account_bounds_restrict_lookup() {
        let accounts = accounts();
        let agg = aggregate_entries(
            &bounds(2, 2, date(2024, 1, 1), date(2024, 12, 31)),
            &accounts,
            &entries(),
        )
        .unwrap();

        assert_eq!(agg.labels.len(), 1);
        assert_eq!(agg.totals.len(), 1);
        assert!(agg.totals.contains_key(&AccountNumber::new(2)));
    }

    #[test]
    fn test_entries_for_unknown_accounts_are_skipped() {
        let accounts = accounts();
        let mut journal = entries();
        journal.push(JournalEntry::debit(2, date(2024, 1, 5), Money::from_units(7)));
        journal.push(JournalEntry::debit(99, date(2024, 1, 5), Money::from_units(1)));

        let agg = aggregate_entries(
            &bounds(1, 100, date(2024, 1, 1), date(2024, 12, 31)),
            &accounts,
            &journal,
        )
        .unwrap();

        assert!(!agg.totals.contains_key(&AccountNumber::new(99)));
        assert_eq!(agg.totals[&AccountNumber::new(2)].debit, Money::from_units(7));
    }

    #[test]
    fn test_inverted_ranges_yield_nothing() {
        let accounts = accounts();
        let inverted_accounts = aggregate_entries(
            &bounds(2, 1, date(2024, 1, 1), date(2024, 12, 31)),
            &accounts,
            &entries(),
        )
        .unwrap();
        assert!(inverted_accounts.is_empty());

        let inverted_periods = aggregate_entries(
            &bounds(1, 3, date(2024, 12, 31), date(2024, 1, 1)),
            &accounts,
            &entries(),
        )
        .unwrap();
        assert!(inverted_periods.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let resolved = bounds(1, 3, date(2024, 1, 1), date(2024, 12, 31));
        assert!(aggregate_entries(&resolved, &[], &entries()).unwrap().is_empty());

        let accounts = accounts();
        assert!(aggregate_entries(&resolved, &accounts, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_overflowing_debits_are_an_error() {
        let accounts = accounts();
        let huge = Money::parse("50000000000000000").unwrap();
        let journal = vec![
            JournalEntry::debit(1, date(2024, 1, 1), huge),
            JournalEntry::debit(1, date(2024, 1, 2), huge),
        ];

        let err = aggregate_entries(
            &bounds(1, 3, date(2024, 1, 1), date(2024, 12, 31)),
            &accounts,
            &journal,
        )
        .unwrap_err();
        assert!(err.is_overflow());
        assert!(err.to_string().contains("account 1"));
    }

    #[test]
    fn test_absorb_reports_overflow() {
        let near_max = AccountTotals {
            debit: Money::from_cents(i64::MAX),
            credit: Money::zero(),
        };
        let entry = JournalEntry::debit(1, date(2024, 1, 1), Money::from_cents(1));
        assert_eq!(near_max.absorb(&entry), None);

        let entry = JournalEntry::credit(1, date(2024, 1, 1), Money::from_cents(1));
        let absorbed = near_max.absorb(&entry).unwrap();
        assert_eq!(absorbed.balance(), Some(Money::from_cents(i64::MAX - 1)));
    }
}
