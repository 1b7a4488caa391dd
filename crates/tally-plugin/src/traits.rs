//! Plugin trait and metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Metadata about a plugin, suitable for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Unique plugin name.
    pub name: String,
    /// Plugin description.
    pub description: String,
}

/// Trait that all shell plugins must implement.
///
/// Plugins are shared through `Arc<dyn Plugin>`; dropping the last handle
/// tears the plugin down.
pub trait Plugin: Send + Sync + fmt::Debug {
    /// Unique, stable plugin name. Used as the registry lookup key.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str {
        ""
    }

    /// Returns plugin metadata.
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: self.name().to_string(),
            description: self.description().to_string(),
        }
    }
}
