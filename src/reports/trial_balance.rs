//! Trial Balance Report
//!
//! The per-account balance rows produced by the balance engine, with their
//! grand totals and the text renderings (summary line, CSV, HTML, terminal
//! table, JSON).

use serde::Serialize;
use std::io::Write;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::balance::AccountTotals;
use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{AccountNumber, Filters, Money, OutputFormat};

/// One account's line in the trial balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct BalanceRow {
    pub account: AccountNumber,
    pub description: String,
    pub debit: Money,
    pub credit: Money,
    /// Always `debit - credit`
    pub balance: Money,
}

impl BalanceRow {
    /// Row for one account; fails if `debit - credit` overflows
    pub fn new(
        account: AccountNumber,
        description: impl Into<String>,
        totals: AccountTotals,
    ) -> LedgerResult<Self> {
        let balance = totals
            .balance()
            .ok_or_else(|| LedgerError::Overflow(format!("balance for account {}", account)))?;
        Ok(Self {
            account,
            description: description.into(),
            debit: totals.debit,
            credit: totals.credit,
            balance,
        })
    }
}

/// Trial balance: rows in ascending account order plus grand totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub balance: Vec<BalanceRow>,
    pub total_debit: Money,
    pub total_credit: Money,
}

#[derive(Tabled)]
struct TerminalRow {
    #[tabled(rename = "ACCOUNT")]
    account: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "DEBIT")]
    debit: String,
    #[tabled(rename = "CREDIT")]
    credit: String,
    #[tabled(rename = "BALANCE")]
    balance: String,
}

impl Report {
    /// Build a report from rows that are already sorted
    ///
    /// Fails if either grand total overflows.
    pub fn from_rows(balance: Vec<BalanceRow>) -> LedgerResult<Self> {
        let total_debit = Money::checked_sum(balance.iter().map(|row| row.debit))
            .ok_or_else(|| LedgerError::Overflow("total debit".to_string()))?;
        let total_credit = Money::checked_sum(balance.iter().map(|row| row.credit))
            .ok_or_else(|| LedgerError::Overflow("total credit".to_string()))?;
        Ok(Self {
            balance,
            total_debit,
            total_credit,
        })
    }

    /// True when no account in range has a qualifying entry
    pub fn is_empty(&self) -> bool {
        self.balance.is_empty()
    }

    /// Totals and filter description, as shown above the report body
    ///
    /// Uses the filters as the user entered them: an absent bound is shown
    /// as `*`.
    pub fn format_summary(&self, filters: &Filters, date_format: &str) -> String {
        let account = |bound: Option<AccountNumber>| {
            bound.map_or_else(|| "*".to_string(), |a| a.to_string())
        };
        let period = |bound: Option<chrono::NaiveDate>| {
            bound.map_or_else(|| "*".to_string(), |d| d.format(date_format).to_string())
        };

        format!(
            "Total Debit: {} Total Credit: {}\nBalance from account {} to {} from period {} to {}\n",
            self.total_debit.format_plain(),
            self.total_credit.format_plain(),
            account(filters.start_account),
            account(filters.end_account),
            period(filters.start_period),
            period(filters.end_period),
        )
    }

    /// Format the rows as a terminal table
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return "No balances in the selected range.\n".to_string();
        }

        let rows: Vec<TerminalRow> = self
            .balance
            .iter()
            .map(|row| TerminalRow {
                account: row.account.to_string(),
                description: row.description.clone(),
                debit: row.debit.format_with_symbol(currency_symbol),
                credit: row.credit.format_with_symbol(currency_symbol),
                balance: row.balance.format_with_symbol(currency_symbol),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::psql())
            .with(Modify::new(Columns::new(2..)).with(Alignment::right()));

        let mut output = table.to_string();
        output.push('\n');
        output.push_str(&format!(
            "Totals: debit {}  credit {}  ({} accounts)\n",
            self.total_debit.format_with_symbol(currency_symbol),
            self.total_credit.format_with_symbol(currency_symbol),
            self.balance.len()
        ));
        output
    }

    /// Export the rows as CSV: one line per account, no header
    ///
    /// Columns: ACCOUNT, DESCRIPTION, DEBIT, CREDIT, BALANCE
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        for row in &self.balance {
            csv_writer
                .write_record([
                    row.account.to_string(),
                    row.description.clone(),
                    row.debit.format_plain(),
                    row.credit.format_plain(),
                    row.balance.format_plain(),
                ])
                .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| LedgerError::Export(e.to_string()))
    }

    /// Export the rows as an HTML table with a header row
    pub fn export_html<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        let mut html = String::new();
        html.push_str("<table class=\"table\">\n");
        html.push_str("  <thead>\n    <tr>\n");
        for header in ["ACCOUNT", "DESCRIPTION", "DEBIT", "CREDIT", "BALANCE"] {
            html.push_str(&format!("      <th>{}</th>\n", header));
        }
        html.push_str("    </tr>\n  </thead>\n  <tbody>\n");

        for row in &self.balance {
            html.push_str("    <tr>\n");
            html.push_str(&format!("      <th scope=\"row\">{}</th>\n", row.account));
            html.push_str(&format!("      <td>{}</td>\n", escape_html(&row.description)));
            html.push_str(&format!("      <td>{}</td>\n", row.debit.format_plain()));
            html.push_str(&format!("      <td>{}</td>\n", row.credit.format_plain()));
            html.push_str(&format!("      <td>{}</td>\n", row.balance.format_plain()));
            html.push_str("    </tr>\n");
        }
        html.push_str("  </tbody>\n</table>\n");

        writer
            .write_all(html.as_bytes())
            .map_err(|e| LedgerError::Export(e.to_string()))
    }

    /// Export the report as pretty-printed JSON
    pub fn export_json<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))
    }

    /// Render the report in the format the filters ask for
    ///
    /// `OutputFormat::None` writes nothing at all.
    pub fn render<W: Write>(
        &self,
        filters: &Filters,
        settings: &Settings,
        writer: &mut W,
    ) -> LedgerResult<()> {
        let summary = || self.format_summary(filters, &settings.date_format);

        match filters.format {
            OutputFormat::None => Ok(()),
            OutputFormat::Json => self.export_json(writer),
            OutputFormat::Csv => {
                write_text(writer, &summary())?;
                self.export_csv(writer)
            }
            OutputFormat::Html => {
                write_text(writer, &summary())?;
                self.export_html(writer)
            }
            OutputFormat::Table => {
                write_text(writer, &summary())?;
                write_text(writer, &self.format_terminal(&settings.currency_symbol))
            }
        }
    }
}

fn write_text<W: Write>(writer: &mut W, text: &str) -> LedgerResult<()> {
    writer
        .write_all(text.as_bytes())
        .map_err(|e| LedgerError::Export(e.to_string()))
}

/// Escape text for inclusion in HTML element content
fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
