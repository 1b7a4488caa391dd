//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use tally_core::result::AppResult;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Render a list of items in the selected format
pub fn render_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Table if items.is_empty() => Ok("No results found.".to_string()),
        OutputFormat::Table => Ok(Table::new(items).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
    }
}

/// Render a single item in the selected format
pub fn render_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Table => Ok(format!("{:#?}", item)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(item)?),
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) -> AppResult<()> {
    println!("{}", render_list(items, format)?);
    Ok(())
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) -> AppResult<()> {
    println!("{}", render_item(item, format)?);
    Ok(())
}
