//! Plugin registry — tracks the active plugin instances.
//!
//! Membership is kept twice: an insertion-ordered list and a name index.
//! Both always hold the same set of plugins. Duplicate detection is by
//! instance identity; a different instance reusing a registered name is
//! rejected so the two containers never disagree.
//!
//! Misuse never fails loudly: adding a registered plugin or removing an
//! unknown one is a no-op.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::signal::Signal;
use crate::traits::Plugin;

/// Internal membership state guarded by the registry lock.
#[derive(Debug, Default)]
struct Members {
    /// Registration order.
    plugins: Vec<Arc<dyn Plugin>>,
    /// Plugin name → plugin instance.
    plugins_by_name: HashMap<String, Arc<dyn Plugin>>,
}

impl Members {
    fn position(&self, plugin: &Arc<dyn Plugin>) -> Option<usize> {
        self.plugins.iter().position(|p| same_instance(p, plugin))
    }
}

/// Returns whether two handles point at the same plugin instance.
fn same_instance(a: &Arc<dyn Plugin>, b: &Arc<dyn Plugin>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Registry of all active plugins.
#[derive(Debug)]
pub struct PluginRegistry {
    members: RwLock<Members>,
    plugin_added: Signal<Arc<dyn Plugin>>,
    plugin_removed: Signal<Arc<dyn Plugin>>,
}

impl PluginRegistry {
    /// Creates a new empty plugin registry.
    pub fn new() -> Self {
        Self {
            members: RwLock::new(Members::default()),
            plugin_added: Signal::new("plugin-added"),
            plugin_removed: Signal::new("plugin-removed"),
        }
    }

    /// Signal fired after a plugin joins the registry.
    pub fn plugin_added(&self) -> &Signal<Arc<dyn Plugin>> {
        &self.plugin_added
    }

    /// Signal fired after a plugin leaves the registry.
    pub fn plugin_removed(&self) -> &Signal<Arc<dyn Plugin>> {
        &self.plugin_removed
    }

    /// Registers a plugin and fires `plugin-added`.
    ///
    /// Returns `false` without notifying anyone when the same instance is
    /// already registered, or when another instance already owns its name.
    pub fn add(&self, plugin: Arc<dyn Plugin>) -> bool {
        {
            let mut members = self.members.write();

            if members.position(&plugin).is_some() {
                return false;
            }

            let name = plugin.name().to_string();
            if members.plugins_by_name.contains_key(&name) {
                warn!(plugin = %name, "Another plugin instance already uses this name, ignoring");
                return false;
            }

            members.plugins.push(plugin.clone());
            members.plugins_by_name.insert(name, plugin.clone());
        }

        self.plugin_added.emit(&plugin);
        info!(plugin = %plugin.name(), "Added plugin to registry");
        true
    }

    /// Unregisters a plugin and fires `plugin-removed`.
    ///
    /// The registry's handle is released after observers ran, which may drop
    /// the plugin. Returns `false` when the instance was not registered.
    pub fn remove(&self, plugin: &Arc<dyn Plugin>) -> bool {
        let removed = {
            let mut members = self.members.write();

            let Some(index) = members.position(plugin) else {
                return false;
            };

            let removed = members.plugins.remove(index);
            members.plugins_by_name.remove(removed.name());
            removed
        };

        self.plugin_removed.emit(&removed);
        info!(plugin = %removed.name(), "Removed plugin from registry");
        true
    }

    /// Returns a snapshot of the registered plugins in registration order.
    pub fn list(&self) -> Vec<Arc<dyn Plugin>> {
        self.members.read().plugins.clone()
    }

    /// Looks up a plugin by exact, case-sensitive name.
    pub fn find(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.members.read().plugins_by_name.get(name).cloned()
    }

    /// Returns the registered plugin names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.members
            .read()
            .plugins
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Checks whether this exact instance is registered.
    pub fn contains(&self, plugin: &Arc<dyn Plugin>) -> bool {
        self.members.read().position(plugin).is_some()
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.members.read().plugins.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.members.read().plugins.is_empty()
    }

    /// Releases every plugin and empties both containers.
    ///
    /// This is teardown, not removal: no `plugin-removed` notifications are
    /// fired. Returns how many plugins were released.
    pub fn clear(&self) -> usize {
        let released = {
            let mut members = self.members.write();
            members.plugins_by_name.clear();
            std::mem::take(&mut members.plugins)
        };

        debug!(released = released.len(), "Plugin registry cleared");
        released.len()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct TestPlugin {
        name: String,
    }

    fn plugin(name: &str) -> Arc<dyn Plugin> {
        Arc::new(TestPlugin {
            name: name.to_string(),
        })
    }

    impl Plugin for TestPlugin {
        fn name(&self) -> &str {
            &self.name
        }
    }

    fn counter(signal: &Signal<Arc<dyn Plugin>>) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        signal.connect(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_add_then_find() {
        let registry = PluginRegistry::new();
        let p = plugin("account-tree");

        assert!(registry.add(p.clone()));
        let found = registry.find("account-tree").unwrap();
        assert!(same_instance(&found, &p));
        assert!(registry.contains(&p));
    }

    #[test]
    fn test_add_twice_is_noop() {
        let registry = PluginRegistry::new();
        let added = counter(registry.plugin_added());
        let p = plugin("register");

        assert!(registry.add(p.clone()));
        assert!(!registry.add(p.clone()));

        assert_eq!(registry.len(), 1);
        assert_eq!(added.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let registry = PluginRegistry::new();
        let added = counter(registry.plugin_added());
        let first = plugin("budget");
        let second = plugin("budget");

        assert!(registry.add(first.clone()));
        assert!(!registry.add(second.clone()));

        assert_eq!(registry.len(), 1);
        assert!(same_instance(&registry.find("budget").unwrap(), &first));
        assert!(!registry.contains(&second));
        assert_eq!(added.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_registered() {
        let registry = PluginRegistry::new();
        let removed = counter(registry.plugin_removed());
        let p = plugin("budget");
        registry.add(p.clone());

        assert!(registry.remove(&p));
        assert!(registry.find("budget").is_none());
        assert!(registry.list().is_empty());
        assert_eq!(removed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_unregistered_is_noop() {
        let registry = PluginRegistry::new();
        let removed = counter(registry.plugin_removed());
        registry.add(plugin("register"));

        // Same name, different instance.
        assert!(!registry.remove(&plugin("register")));
        assert_eq!(registry.len(), 1);
        assert!(registry.find("register").is_some());
        assert_eq!(removed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_list_is_ordered_snapshot() {
        let registry = PluginRegistry::new();
        let a = plugin("a");
        let b = plugin("b");
        let c = plugin("c");
        registry.add(a.clone());
        registry.add(b.clone());
        registry.add(c.clone());

        let snapshot = registry.list();
        registry.remove(&b);
        registry.add(plugin("d"));

        let names: Vec<&str> = snapshot.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(registry.names(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let registry = PluginRegistry::new();
        registry.add(plugin("Budget"));

        assert!(registry.find("Budget").is_some());
        assert!(registry.find("budget").is_none());
        assert!(registry.find("never-registered").is_none());
    }

    #[test]
    fn test_remove_releases_registry_handle() {
        let registry = PluginRegistry::new();
        let p = plugin("register");
        registry.add(p.clone());
        assert_eq!(Arc::strong_count(&p), 3);

        registry.remove(&p);
        assert_eq!(Arc::strong_count(&p), 1);
    }

    #[test]
    fn test_observer_sees_membership() {
        let registry = Arc::new(PluginRegistry::new());
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let weak = Arc::downgrade(&registry);
        let s = seen.clone();
        registry.plugin_added().connect(move |p| {
            let registry = weak.upgrade().unwrap();
            s.lock().push((p.name().to_string(), registry.find(p.name()).is_some()));
        });

        registry.add(plugin("menu-additions"));
        assert_eq!(*seen.lock(), vec![("menu-additions".to_string(), true)]);
    }

    #[test]
    fn test_clear_releases_without_notifying() {
        let registry = PluginRegistry::new();
        let removed = counter(registry.plugin_removed());
        let p = plugin("a");
        registry.add(p.clone());
        registry.add(plugin("b"));

        assert_eq!(registry.clear(), 2);
        assert!(registry.is_empty());
        assert!(registry.find("a").is_none());
        assert_eq!(Arc::strong_count(&p), 1);
        assert_eq!(removed.load(Ordering::SeqCst), 0);
    }
}
