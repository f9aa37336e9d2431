//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "retime")]
#[command(about = "Transcript re-timing tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transfer machine-transcript timings onto a corrected transcript
    Align(crate::align::Args),
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Align(args) => crate::align::execute(args.try_into()?),
    }
}
