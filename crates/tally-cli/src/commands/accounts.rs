//! Account type CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use tally_core::error::AppError;
use tally_core::types::AccountType;

/// Arguments for account commands
#[derive(Debug, Args)]
pub struct AccountsArgs {
    /// Account subcommand
    #[command(subcommand)]
    pub command: AccountsCommand,
}

/// Account subcommands
#[derive(Debug, Subcommand)]
pub enum AccountsCommand {
    /// Show which account types offer automatic interest transfers
    Types {
        /// Only show this account type
        #[arg(long = "type")]
        account_type: Option<String>,
    },
}

/// Table row for an account type
#[derive(Debug, Serialize, Tabled)]
struct AccountTypeRow {
    #[tabled(rename = "Type")]
    account_type: AccountType,
    #[tabled(rename = "Interest charge")]
    interest_charge: bool,
    #[tabled(rename = "Interest payment")]
    interest_payment: bool,
    #[tabled(rename = "Interest transfer")]
    interest_xfer: bool,
}

impl From<AccountType> for AccountTypeRow {
    fn from(t: AccountType) -> Self {
        Self {
            account_type: t,
            interest_charge: t.has_auto_interest_charge(),
            interest_payment: t.has_auto_interest_payment(),
            interest_xfer: t.has_auto_interest_xfer(),
        }
    }
}

/// Execute account commands
pub fn execute(args: &AccountsArgs, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        AccountsCommand::Types { account_type } => {
            let types = match account_type {
                Some(name) => vec![name.parse::<AccountType>()?],
                None => AccountType::ALL.to_vec(),
            };
            let rows: Vec<AccountTypeRow> = types.into_iter().map(AccountTypeRow::from).collect();
            output::print_list(&rows, format)?;
        }
    }
    Ok(())
}
