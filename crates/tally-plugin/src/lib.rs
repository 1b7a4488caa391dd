//! # tally-plugin
//!
//! Plugin framework for the Tally shell. Provides:
//!
//! - Plugin registry with insertion-ordered membership and a name index
//! - Observer signals fired when plugins are added or removed
//! - Lifecycle hook points (startup, shutdown, ...) with ordered danglers
//! - Plugin manager that owns the registry and tears it down on shutdown
//! - The built-in plugin catalog

pub mod builtin;
pub mod hooks;
pub mod manager;
pub mod registry;
pub mod signal;
pub mod traits;

pub use builtin::{BuiltinPlugin, builtin_catalog, find_builtin};
pub use hooks::definitions::HookPoint;
pub use hooks::dispatcher::HookDispatcher;
pub use hooks::registry::{DanglerId, HookRegistry};
pub use manager::PluginManager;
pub use registry::PluginRegistry;
pub use signal::{Signal, SubscriptionId};
pub use traits::{Plugin, PluginInfo};
