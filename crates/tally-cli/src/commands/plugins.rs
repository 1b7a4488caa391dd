//! Plugin inspection CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use crate::shell::Shell;
use tally_core::config::AppConfig;
use tally_core::error::AppError;
use tally_plugin::{Plugin, builtin_catalog};

/// Arguments for plugin commands
#[derive(Debug, Args)]
pub struct PluginsArgs {
    /// Plugin subcommand
    #[command(subcommand)]
    pub command: PluginsCommand,
}

/// Plugin subcommands
#[derive(Debug, Subcommand)]
pub enum PluginsCommand {
    /// Start the shell and list the active plugins in load order
    List,
    /// List every built-in plugin
    Catalog,
    /// Show one active plugin by exact name
    Show {
        /// Plugin name
        name: String,
    },
}

/// Table row for a plugin
#[derive(Debug, Serialize, Tabled)]
struct PluginRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl PluginRow {
    fn from_plugin(plugin: &dyn Plugin) -> Self {
        let info = plugin.info();
        Self {
            name: info.name,
            description: info.description,
        }
    }
}

/// Execute plugin commands
pub fn execute(args: &PluginsArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        PluginsCommand::List => {
            let shell = Shell::start(config);
            let rows: Vec<PluginRow> = shell
                .registry()
                .list()
                .iter()
                .map(|p| PluginRow::from_plugin(&**p))
                .collect();
            shell.shutdown();
            output::print_list(&rows, format)?;
        }
        PluginsCommand::Catalog => {
            let rows: Vec<PluginRow> = builtin_catalog()
                .iter()
                .map(|p| PluginRow::from_plugin(&**p))
                .collect();
            output::print_list(&rows, format)?;
        }
        PluginsCommand::Show { name } => {
            let shell = Shell::start(config);
            let found = shell.registry().find(name);
            shell.shutdown();

            let plugin = found
                .ok_or_else(|| AppError::not_found(format!("Plugin '{}' is not active", name)))?;
            output::print_item(&plugin.info(), format)?;
        }
    }
    Ok(())
}
