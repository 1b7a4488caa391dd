//! The shell's top-level context: hook facility plus plugin manager.

use std::sync::Arc;

use tracing::info;

use tally_core::config::AppConfig;
use tally_plugin::{HookDispatcher, HookPoint, HookRegistry, PluginManager, PluginRegistry};

/// Owns every process-wide shell service for one run.
#[derive(Debug)]
pub struct Shell {
    dispatcher: HookDispatcher,
    manager: PluginManager,
    registry: Arc<PluginRegistry>,
}

impl Shell {
    /// Builds the shell, loads configured plugins, and runs startup hooks.
    pub fn start(config: &AppConfig) -> Self {
        let hooks = Arc::new(HookRegistry::new());
        let dispatcher = HookDispatcher::new(hooks.clone());
        let manager = PluginManager::new(hooks);

        let registry = manager.get();
        registry
            .plugin_added()
            .connect(|p| info!(plugin = %p.name(), "Plugin activated"));
        registry
            .plugin_removed()
            .connect(|p| info!(plugin = %p.name(), "Plugin deactivated"));

        if config.plugins.auto_load {
            manager.load_builtins(&config.plugins.enabled);
        }

        dispatcher.run_once(HookPoint::Startup);
        dispatcher.run_once(HookPoint::UiStartup);
        dispatcher.run_once(HookPoint::UiPostStartup);

        info!(plugins = registry.len(), "Shell started");
        Self {
            dispatcher,
            manager,
            registry,
        }
    }

    /// Returns the registry this shell started with.
    ///
    /// After [`Shell::shutdown`] it is empty; no fresh registry is created.
    pub fn registry(&self) -> &Arc<PluginRegistry> {
        &self.registry
    }

    /// Returns every hook point with its current dangler count.
    pub fn hook_summary(&self) -> Vec<(HookPoint, usize)> {
        let hooks = self.dispatcher.registry();
        HookPoint::ALL
            .iter()
            .map(|hook| (*hook, hooks.dangler_count(*hook)))
            .collect()
    }

    /// Runs the UI and process shutdown hooks, once.
    pub fn shutdown(&self) {
        self.dispatcher.run_once(HookPoint::UiShutdown);
        self.dispatcher.run_once(HookPoint::Shutdown);
        info!("Shell stopped");
    }
}
