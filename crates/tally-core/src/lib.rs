//! # tally-core
//!
//! Core crate for the Tally shell. Contains configuration schemas,
//! account-type rules, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Tally crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
