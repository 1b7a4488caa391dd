//! Lifecycle hook inspection CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use crate::shell::Shell;
use tally_core::config::AppConfig;
use tally_core::error::AppError;
use tally_plugin::HookPoint;

/// Arguments for hook commands
#[derive(Debug, Args)]
pub struct HooksArgs {
    /// Hook subcommand
    #[command(subcommand)]
    pub command: HooksCommand,
}

/// Hook subcommands
#[derive(Debug, Subcommand)]
pub enum HooksCommand {
    /// Start the shell and list every hook point with its dangler count
    List,
}

/// Table row for a hook point
#[derive(Debug, Serialize, Tabled)]
struct HookRow {
    #[tabled(rename = "Hook")]
    hook: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
    #[tabled(rename = "Danglers")]
    danglers: usize,
}

impl HookRow {
    fn new(hook: HookPoint, danglers: usize) -> Self {
        Self {
            hook: hook.as_str(),
            description: hook.description(),
            danglers,
        }
    }
}

/// Execute hook commands
pub fn execute(args: &HooksArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        HooksCommand::List => {
            let shell = Shell::start(config);
            let rows: Vec<HookRow> = shell
                .hook_summary()
                .into_iter()
                .map(|(hook, danglers)| HookRow::new(hook, danglers))
                .collect();
            shell.shutdown();
            output::print_list(&rows, format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_uses_hook_name_and_description() {
        let row = HookRow::new(HookPoint::BookSaved, 2);
        assert_eq!(row.hook, "book_saved");
        assert_eq!(row.description, "Run after a book is saved");
        assert_eq!(row.danglers, 2);
    }
}
