//! CLI commands for the trial balance report
//!
//! Loads a ledger snapshot, runs the balance engine and renders the result.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::balance::{compute_balance_report_with, PeriodDefaults};
use crate::config::{LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Filters;
use crate::storage::Ledger;

/// Where to read the ledger from
#[derive(Args, Debug, Clone, Default)]
pub struct LedgerSource {
    /// Chart of accounts CSV (ACCOUNT,LABEL); defaults to the data directory
    #[arg(long, requires = "journal")]
    pub accounts: Option<PathBuf>,

    /// Journal CSV (ACCOUNT,PERIOD,DEBIT,CREDIT); defaults to the data directory
    #[arg(long, requires = "accounts")]
    pub journal: Option<PathBuf>,
}

impl LedgerSource {
    /// Load and validate the ledger snapshot
    pub fn load(&self, paths: &LedgerPaths, settings: &Settings) -> LedgerResult<Ledger> {
        let ledger = match (&self.accounts, &self.journal) {
            (Some(accounts), Some(journal)) => {
                Ledger::from_csv_files(accounts, journal, &settings.date_format)?
            }
            _ => Ledger::load(paths)?,
        };
        ledger.validate()?;
        Ok(ledger)
    }
}

/// Arguments of `report`
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: LedgerSource,

    /// First account to include (defaults to the lowest account)
    #[arg(long)]
    pub start_account: Option<String>,

    /// Last account to include (defaults to the highest account)
    #[arg(long)]
    pub end_account: Option<String>,

    /// First period to include (defaults to the first journal entry)
    #[arg(long)]
    pub start_period: Option<String>,

    /// Last period to include (defaults to the last journal entry)
    #[arg(long)]
    pub end_period: Option<String>,

    /// Output format: csv, html, table, json or none
    #[arg(short, long)]
    pub format: Option<String>,

    /// Derive default periods from the earliest and latest entry instead of
    /// the first and last recorded one
    #[arg(long)]
    pub scan_periods: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ReportArgs {
    /// Filters as entered; unparseable bounds are dropped
    pub fn filters(&self, settings: &Settings) -> Filters {
        let mut filters = Filters::from_input(
            self.start_account.as_deref(),
            self.end_account.as_deref(),
            self.start_period.as_deref(),
            self.end_period.as_deref(),
            self.format.as_deref(),
            &settings.date_format,
        );
        if self.format.is_none() {
            filters.format = settings.default_format;
        }
        filters
    }

    pub fn period_defaults(&self, settings: &Settings) -> PeriodDefaults {
        if self.scan_periods {
            PeriodDefaults::Scan
        } else {
            settings.period_defaults
        }
    }
}

/// Handle the report command
pub fn handle_report_command(
    paths: &LedgerPaths,
    settings: &Settings,
    args: ReportArgs,
) -> LedgerResult<()> {
    let ledger = args.source.load(paths, settings)?;
    let filters = args.filters(settings);

    let report = compute_balance_report_with(
        &ledger.accounts,
        &ledger.entries,
        &filters,
        args.period_defaults(settings),
    )?;

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.render(&filters, settings, &mut writer)?;
        writer
            .flush()
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        println!("Trial balance written to: {}", path.display());
    } else {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        report.render(&filters, settings, &mut writer)?;
    }

    Ok(())
}

/// Handle the check command: load, validate and summarise the ledger
pub fn handle_check_command(
    paths: &LedgerPaths,
    settings: &Settings,
    source: LedgerSource,
) -> LedgerResult<()> {
    let ledger = source.load(paths, settings)?;

    println!("Ledger OK");
    println!("  Accounts:        {}", ledger.accounts.len());
    println!("  Journal entries: {}", ledger.entries.len());
    if let (Some(first), Some(last)) = (ledger.entries.first(), ledger.entries.last()) {
        println!(
            "  Recorded from {} to {}",
            first.period.format(&settings.date_format),
            last.period.format(&settings.date_format)
        );
    }

    Ok(())
}
