mod commands;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use commands::CheckCommand;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Gridmeta CLI - grid-resolution metadata derivation and validation
#[derive(Debug, Parser)]
#[command(
    name = "gridmeta",
    version,
    about = "Derive grid spacing and enforce validation profiles"
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve spacing for a run request and enforce a validation profile
    Check(CheckCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let exit_code = match cli.command {
        Commands::Check(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}

fn init_tracing(level: &str) -> Result<()> {
    let level: Level = level
        .parse()
        .map_err(|_| anyhow!("invalid log level '{level}'"))?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
