use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use expense_tracker::cli::{run_demo, run_script};
use expense_tracker::config::{paths::CONFIG_DIR_ENV, Settings, TrackerPaths};
use expense_tracker::logging::init_tracing;
use expense_tracker::ExpenseManager;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "In-memory personal expense tracker",
    long_about = "Tracks expenses by category, checks them against a planned budget \
                  and prints category reports. Nothing is saved between runs: feed \
                  a script to 'run' to build up state within one process."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in walkthrough
    Demo,

    /// Run a script of commands against one in-memory tracker
    Run {
        /// Script file, or "-" to read from stdin
        script: PathBuf,
        /// Stop at the first rejected command
        #[arg(long)]
        strict: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;
    init_tracing(&settings.log_filter);

    match cli.command {
        Some(Commands::Demo) => {
            run_demo(settings, &mut io::stdout().lock())?;
        }
        Some(Commands::Run { script, strict }) => {
            let mut manager = ExpenseManager::with_settings(settings);
            let mut out = io::stdout().lock();

            let summary = if script.as_os_str() == "-" {
                run_script(&mut manager, io::stdin().lock(), &mut out, strict)?
            } else {
                let file = File::open(&script)
                    .with_context(|| format!("Failed to open script {}", script.display()))?;
                run_script(&mut manager, BufReader::new(file), &mut out, strict)?
            };

            tracing::info!(
                executed = summary.executed,
                warnings = summary.warnings,
                "script finished"
            );
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config file: {}", paths.settings_file().display());
            println!("(override the directory with {})", CONFIG_DIR_ENV);
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Report header:   {}", settings.report_header);
            println!("  Empty report:    {}", settings.empty_report_message);
            println!("  Log filter:      {}", settings.log_filter);
        }
        None => {
            println!("Expense Tracker - in-memory expense tracking");
            println!();
            println!("Run 'expense-tracker --help' for usage information.");
            println!("Run 'expense-tracker demo' for a walkthrough.");
        }
    }

    Ok(())
}
