mod check;
mod completions;
mod export;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use export::ExportCommand;
use eyre::Result;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ddlgen_model::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "ddlgen")]
#[command(version)]
#[command(about = "Export create/drop/update DDL scripts from a persistence manifest")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Export(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate DDL scripts for a persistence unit
    Export(ExportCommand),

    /// Validate persistence.toml without generating scripts
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
