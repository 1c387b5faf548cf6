//! CLI for the DSF dataset fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dsf_core::config;

use commands::{run_fetch, run_list, run_status};

/// Top-level CLI for the DSF dataset fetcher.
#[derive(Debug, Parser)]
#[command(name = "dsf")]
#[command(about = "DSF: fetch and organize the StockWise Kaggle datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download all configured datasets and organize them (the default).
    Fetch,

    /// Show the built-in dataset catalog.
    List,

    /// Show what is present in the output directory.
    Status,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        // A bare `dsf` performs the full fetch run.
        match cli.command.unwrap_or(CliCommand::Fetch) {
            CliCommand::Fetch => run_fetch(&cfg)?,
            CliCommand::List => run_list(),
            CliCommand::Status => run_status(&cfg)?,
        }

        Ok(())
    }
}
