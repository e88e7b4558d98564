use anyhow::Result;
use clap::{Parser, Subcommand};

use trial_balance::cli::{handle_check_command, handle_report_command, LedgerSource, ReportArgs};
use trial_balance::config::{LedgerPaths, Settings};
use trial_balance::logging::init_logger;

#[derive(Parser)]
#[command(
    name = "trialbal",
    author = "Kaylee Beyene",
    version,
    about = "Trial balance reports for a ledger",
    long_about = "trialbal aggregates journal entries into a per-account trial \
                  balance, filtered by account and period range, and renders it \
                  as a table, CSV, HTML or JSON."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and render a trial balance
    #[command(alias = "tb")]
    Report(ReportArgs),

    /// Load and validate the ledger without reporting
    Check(LedgerSource),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Report(args)) => handle_report_command(&paths, &settings, args)?,
        Some(Commands::Check(source)) => handle_check_command(&paths, &settings, source)?,
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized trial-balance at: {}", paths.base_dir().display());
            println!();
            println!("Place your ledger in:");
            println!("  {}", paths.accounts_file().display());
            println!("  {}", paths.journal_file().display());
        }
        Some(Commands::Config) => {
            println!("trial-balance Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Date format:     {}", settings.date_format);
            println!("  Default format:  {}", settings.default_format);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Period defaults: {:?}", settings.period_defaults);
        }
        None => {
            println!("trialbal - ledger trial balance reports");
            println!();
            println!("Run 'trialbal --help' for usage information.");
            println!("Run 'trialbal report --accounts accounts.csv --journal journal.csv' to get started.");
        }
    }

    Ok(())
}
