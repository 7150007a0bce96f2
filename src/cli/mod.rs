//! i2loc CLI - Command-line interface for I2 Localization dump tools

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "i2loc")]
#[command(about = "i2loc: I2 Localization dump tools for Unity assets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the i2loc CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
