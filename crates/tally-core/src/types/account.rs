//! Account type enumeration and auto-interest rules.
//!
//! The account editor offers an automatic interest transfer dialog only for
//! the account types listed here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Kinds of ledger accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Checking or savings account at a bank.
    Bank,
    /// Cash on hand.
    Cash,
    /// Credit card.
    Credit,
    /// Generic asset.
    Asset,
    /// Generic liability.
    Liability,
    /// Individual stock holding.
    Stock,
    /// Mutual fund holding.
    Mutual,
    /// Currency trading account.
    Currency,
    /// Income category.
    Income,
    /// Expense category.
    Expense,
    /// Owner's equity.
    Equity,
    /// Accounts receivable.
    Receivable,
    /// Accounts payable.
    Payable,
    /// Top of the account tree.
    Root,
    /// Trading account for multi-currency books.
    Trading,
}

impl AccountType {
    /// Every account type, in display order.
    pub const ALL: [AccountType; 15] = [
        Self::Bank,
        Self::Cash,
        Self::Credit,
        Self::Asset,
        Self::Liability,
        Self::Stock,
        Self::Mutual,
        Self::Currency,
        Self::Income,
        Self::Expense,
        Self::Equity,
        Self::Receivable,
        Self::Payable,
        Self::Root,
        Self::Trading,
    ];

    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bank => "bank",
            Self::Cash => "cash",
            Self::Credit => "credit",
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Stock => "stock",
            Self::Mutual => "mutual",
            Self::Currency => "currency",
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Equity => "equity",
            Self::Receivable => "receivable",
            Self::Payable => "payable",
            Self::Root => "root",
            Self::Trading => "trading",
        }
    }

    /// Whether an interest charge can be booked automatically.
    pub fn has_auto_interest_charge(&self) -> bool {
        matches!(self, Self::Credit | Self::Liability | Self::Payable)
    }

    /// Whether an interest payment can be booked automatically.
    pub fn has_auto_interest_payment(&self) -> bool {
        matches!(
            self,
            Self::Bank | Self::Asset | Self::Mutual | Self::Receivable
        )
    }

    /// Whether the auto interest transfer dialog applies at all.
    pub fn has_auto_interest_xfer(&self) -> bool {
        self.has_auto_interest_charge() || self.has_auto_interest_payment()
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| AppError::validation(format!("Invalid account type: '{s}'")))
    }
}
