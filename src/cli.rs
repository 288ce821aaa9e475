use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Forecasting of monthly childhood URTI case counts.
#[derive(Parser)]
#[command(
    name = "urti",
    version,
    about = "ARIMA forecasting of monthly childhood URTI case counts"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the whole pipeline and write a JSON report.
    Run(RunArgs),
    /// Run the augmented Dickey-Fuller test on the series.
    Check(CommandArgs),
    /// Fit the candidate orders and compare AIC/BIC.
    Compare(CommandArgs),
    /// Fit the configured order and forecast every horizon.
    Forecast(CommandArgs),
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "urti.toml")]
    pub config: PathBuf,

    /// Path for the JSON report.
    #[arg(short, long, default_value = "urti-report.json")]
    pub output: PathBuf,

    /// Fit the candidate orders on the rayon thread pool.
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments shared by `check`, `compare` and `forecast`.
#[derive(clap::Args)]
pub struct CommandArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "urti.toml")]
    pub config: PathBuf,

    /// Also write the section as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
