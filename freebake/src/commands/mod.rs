mod check;
mod completions;
mod explain;
mod generate;
mod init;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use explain::ExplainCommand;
use generate::GenerateCommand;
use init::InitCommand;

/// Default model file name, looked up in the current directory.
pub(crate) const MODEL_FILE: &str = "freebake.toml";

/// Extension trait for exiting on model errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for freebake_model::Result<T> {
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
#[command(name = "freebake")]
#[command(version)]
#[command(about = "Generate Java builder classes from freebake.toml models")]
pub(crate) struct Cli {
    /// Log debug output to stderr (FREEBAKE_LOG and RUST_LOG take precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate builder sources from freebake.toml
    Generate(GenerateCommand),

    /// Validate freebake.toml without generating code
    Check(CheckCommand),

    /// Show which strategy handles each property
    Explain(ExplainCommand),

    /// Write a starter freebake.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
