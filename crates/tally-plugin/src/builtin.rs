//! Built-in plugin catalog.
//!
//! The UI modules compiled into the shell binary. Each call hands out fresh
//! instances; the registry decides which of them become active.

use std::sync::Arc;

use crate::traits::Plugin;

/// A compiled-in UI plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinPlugin {
    name: &'static str,
    description: &'static str,
}

impl BuiltinPlugin {
    const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

impl Plugin for BuiltinPlugin {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }
}

const CATALOG: [BuiltinPlugin; 6] = [
    BuiltinPlugin::new("basic-commands", "File, edit, and tools menu commands"),
    BuiltinPlugin::new("account-tree", "Account tree page and account actions"),
    BuiltinPlugin::new("register", "General journal and account register pages"),
    BuiltinPlugin::new("budget", "Budget pages and budget actions"),
    BuiltinPlugin::new("report-system", "Report menu and report page support"),
    BuiltinPlugin::new("menu-additions", "Menu entries contributed by extensions"),
];

/// Returns new instances of every built-in plugin, in catalog order.
pub fn builtin_catalog() -> Vec<Arc<BuiltinPlugin>> {
    CATALOG.iter().cloned().map(Arc::new).collect()
}

/// Returns a new instance of the built-in plugin named `name`.
pub fn find_builtin(name: &str) -> Option<Arc<dyn Plugin>> {
    CATALOG
        .iter()
        .find(|p| p.name == name)
        .map(|p| Arc::new(p.clone()) as Arc<dyn Plugin>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_are_unique() {
        let catalog = builtin_catalog();
        let mut names: Vec<&str> = catalog.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_find_builtin() {
        let plugin = find_builtin("register").unwrap();
        assert_eq!(plugin.name(), "register");
        assert!(!plugin.description().is_empty());
        assert!(find_builtin("Register").is_none());
        assert!(find_builtin("scheduled-transactions").is_none());
    }

    #[test]
    fn test_find_returns_fresh_instance() {
        let a = find_builtin("budget").unwrap();
        let b = find_builtin("budget").unwrap();
        assert!(!std::ptr::addr_eq(Arc::as_ptr(&a), Arc::as_ptr(&b)));
    }
}
