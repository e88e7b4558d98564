//! Report assembly
//!
//! Joins aggregated totals with their account labels and orders the rows.

use super::aggregator::Aggregation;
use crate::error::{LedgerError, LedgerResult};
use crate::reports::{BalanceRow, Report};

/// Build the ordered report from an aggregation
///
/// Every aggregated account must have a label in the lookup it was built
/// from; a missing label is reported as an integrity failure. A balance or
/// grand total that overflows is reported as an overflow.
pub fn assemble_report(aggregation: Aggregation<'_>) -> LedgerResult<Report> {
    let Aggregation { labels, totals } = aggregation;

    let mut rows = totals
        .into_iter()
        .map(|(account, totals)| {
            let description = labels.get(&account).ok_or_else(|| {
                LedgerError::Integrity(format!(
                    "aggregated account {} is missing from the label lookup",
                    account
                ))
            })?;
            BalanceRow::new(account, *description, totals)
        })
        .collect::<LedgerResult<Vec<_>>>()?;

    rows.sort_by_key(|row| row.account);

    Report::from_rows(rows)
}
