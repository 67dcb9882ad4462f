//! CLI for the LPLink derivative link replacer.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_init_config, run_list, run_replace};

/// Top-level CLI for LPLink.
#[derive(Debug, Parser)]
#[command(name = "lplink")]
#[command(
    about = "LPLink: replace the master link in every derivative landing page",
    long_about = None
)]
pub struct Cli {
    /// Defaults to `run` with the built-in project.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Replace the master link in each derivative's entry file.
    Run(RunArgs),

    /// Show the derivative folders and their target links.
    List {
        /// TOML project file to use instead of the built-in project.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Write the built-in project as a TOML file to customise.
    InitConfig {
        /// Destination path (must not exist).
        path: PathBuf,
    },
}

#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Directory containing the upload directory (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// TOML project file to use instead of the built-in project.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Count occurrences without modifying any file.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let command = cli
            .command
            .unwrap_or_else(|| CliCommand::Run(RunArgs::default()));
        tracing::debug!("dispatching {:?}", command);

        match command {
            CliCommand::Run(args) => run_replace(&args)?,
            CliCommand::List { config } => run_list(config.as_deref())?,
            CliCommand::InitConfig { path } => run_init_config(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
