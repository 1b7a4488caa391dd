//! Shared domain types.

pub mod account;

pub use account::AccountType;
