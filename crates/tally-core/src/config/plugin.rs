//! Plugin system configuration.

use serde::{Deserialize, Serialize};

/// Plugin system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Whether to load the enabled built-in plugins on startup.
    #[serde(default = "default_true")]
    pub auto_load: bool,
    /// Names of built-in plugins to register, in load order.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            auto_load: default_true(),
            enabled: default_enabled(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_enabled() -> Vec<String> {
    ["basic-commands", "account-tree", "register", "menu-additions"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
