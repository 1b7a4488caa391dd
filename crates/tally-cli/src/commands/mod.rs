//! CLI command definitions and dispatch.

pub mod accounts;
pub mod config;
pub mod hooks;
pub mod plugins;
pub mod run;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use tally_core::config::AppConfig;
use tally_core::error::AppError;

/// Tally — personal finance shell
#[derive(Debug, Parser)]
#[command(name = "tally", version, about, long_about = None)]
pub struct Cli {
    /// Overlay configuration file, merged over `config/default.toml`
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the shell and wait for Ctrl-C
    Run,
    /// Plugin inspection
    Plugins(plugins::PluginsArgs),
    /// Lifecycle hook inspection
    Hooks(hooks::HooksArgs),
    /// Account type rules
    Accounts(accounts::AccountsArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(self.config.as_deref())?;
        crate::logging::init_logging(&config.logging);

        match &self.command {
            Commands::Run => run::execute(&config).await,
            Commands::Plugins(args) => plugins::execute(args, &config, self.format),
            Commands::Hooks(args) => hooks::execute(args, &config, self.format),
            Commands::Accounts(args) => accounts::execute(args, self.format),
            Commands::Config(args) => config::execute(args, &config, self.format),
        }
    }
}
