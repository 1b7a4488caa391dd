//! Plugin manager — owns the plugin registry for the shell's lifetime.
//!
//! The registry is created on the first [`PluginManager::get`] and a
//! teardown dangler is attached to [`HookPoint::Shutdown`] at the same time.
//! Teardown releases every plugin and empties the slot, so a later `get`
//! starts over with a fresh, empty registry.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{info, warn};

use tally_core::error::AppError;
use tally_core::result::AppResult;

use crate::builtin::find_builtin;
use crate::hooks::definitions::HookPoint;
use crate::hooks::registry::{DanglerId, HookRegistry};
use crate::registry::PluginRegistry;
use crate::traits::Plugin;

/// The live registry and the shutdown dangler that tears it down.
#[derive(Debug, Default)]
struct Slot {
    registry: Option<Arc<PluginRegistry>>,
    shutdown_dangler: Option<DanglerId>,
}

#[derive(Debug)]
struct Inner {
    hooks: Arc<HookRegistry>,
    slot: Mutex<Slot>,
}

impl Inner {
    fn teardown(&self) -> bool {
        let (registry, dangler) = {
            let mut slot = self.slot.lock();
            (slot.registry.take(), slot.shutdown_dangler.take())
        };

        if let Some(id) = dangler {
            self.hooks.remove_dangler(id);
        }

        let Some(registry) = registry else {
            return false;
        };

        let released = registry.clear();
        info!(released = released, "Plugin manager shut down");
        true
    }
}

/// Owns the plugin registry and wires it to the shutdown hook.
///
/// Cloning is cheap; clones share the same registry slot.
#[derive(Debug, Clone)]
pub struct PluginManager {
    inner: Arc<Inner>,
}

impl PluginManager {
    /// Creates a plugin manager attached to the given hook registry.
    pub fn new(hooks: Arc<HookRegistry>) -> Self {
        Self {
            inner: Arc::new(Inner {
                hooks,
                slot: Mutex::new(Slot::default()),
            }),
        }
    }

    /// Returns the live registry, creating it on first use.
    pub fn get(&self) -> Arc<PluginRegistry> {
        let mut slot = self.inner.slot.lock();

        if let Some(registry) = &slot.registry {
            return registry.clone();
        }

        let registry = Arc::new(PluginRegistry::new());
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let id = self.inner.hooks.add_dangler(HookPoint::Shutdown, move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.teardown();
            }
        });

        slot.registry = Some(registry.clone());
        slot.shutdown_dangler = Some(id);
        info!("Plugin registry created");
        registry
    }

    /// Checks whether a registry is currently live.
    pub fn is_active(&self) -> bool {
        self.inner.slot.lock().registry.is_some()
    }

    /// Tears the registry down without waiting for the shutdown hook.
    ///
    /// Returns `false` when there was nothing to tear down.
    pub fn shutdown(&self) -> bool {
        self.inner.teardown()
    }

    /// Registers the built-in plugin named `name`.
    ///
    /// Returns the registered instance. Fails if no such built-in exists or
    /// the name is already taken by another instance.
    pub fn load_builtin(&self, name: &str) -> AppResult<Arc<dyn Plugin>> {
        let plugin = find_builtin(name)
            .ok_or_else(|| AppError::not_found(format!("No built-in plugin named '{name}'")))?;

        if !self.get().add(plugin.clone()) {
            return Err(AppError::conflict(format!(
                "Plugin '{name}' is already registered"
            )));
        }

        Ok(plugin)
    }

    /// Registers each named built-in plugin in order.
    ///
    /// Unknown or already registered names are logged and skipped. Returns
    /// the number of plugins added.
    pub fn load_builtins(&self, names: &[String]) -> usize {
        let mut loaded = 0;

        for name in names {
            match self.load_builtin(name) {
                Ok(_) => loaded += 1,
                Err(e) => warn!(plugin = %name, error = %e, "Skipping built-in plugin"),
            }
        }

        info!(loaded = loaded, requested = names.len(), "Built-in plugins loaded");
        loaded
    }

    /// Returns the hook registry this manager is attached to.
    pub fn hooks(&self) -> &Arc<HookRegistry> {
        &self.inner.hooks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::dispatcher::HookDispatcher;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_get_returns_same_registry() {
        let manager = PluginManager::new(Arc::new(HookRegistry::new()));
        assert!(!manager.is_active());

        let a = manager.get();
        let b = manager.get();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(manager.is_active());
        assert_eq!(manager.hooks().dangler_count(HookPoint::Shutdown), 1);
    }

    #[test]
    fn test_shutdown_hook_tears_down() {
        let hooks = Arc::new(HookRegistry::new());
        let dispatcher = HookDispatcher::new(hooks.clone());
        let manager = PluginManager::new(hooks.clone());

        let registry = manager.get();
        assert_eq!(manager.load_builtins(&names(&["register", "budget"])), 2);

        assert_eq!(dispatcher.run_once(HookPoint::Shutdown), Some(1));
        assert!(!manager.is_active());
        assert!(registry.list().is_empty());
        assert_eq!(hooks.dangler_count(HookPoint::Shutdown), 0);

        let fresh = manager.get();
        assert!(!Arc::ptr_eq(&registry, &fresh));
        assert!(fresh.is_empty());
    }

    #[test]
    fn test_explicit_shutdown_is_idempotent() {
        let hooks = Arc::new(HookRegistry::new());
        let manager = PluginManager::new(hooks.clone());
        manager.get();

        assert!(manager.shutdown());
        assert!(!manager.shutdown());
        assert_eq!(hooks.dangler_count(HookPoint::Shutdown), 0);
    }

    #[test]
    fn test_load_builtin_errors() {
        let manager = PluginManager::new(Arc::new(HookRegistry::new()));

        let err = manager.load_builtin("no-such-plugin").unwrap_err();
        assert_eq!(err.kind, tally_core::error::ErrorKind::NotFound);

        manager.load_builtin("register").unwrap();
        let err = manager.load_builtin("register").unwrap_err();
        assert_eq!(err.kind, tally_core::error::ErrorKind::Conflict);
    }

    #[test]
    fn test_load_builtins_skips_unknown() {
        let manager = PluginManager::new(Arc::new(HookRegistry::new()));
        let loaded = manager.load_builtins(&names(&["account-tree", "bogus", "register"]));

        assert_eq!(loaded, 2);
        assert_eq!(manager.get().names(), vec!["account-tree", "register"]);
    }
}
