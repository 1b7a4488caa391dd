//! Hook dispatcher — runs the danglers attached to a hook point.
//!
//! Danglers run synchronously in registration order. The dangler list is
//! snapshotted first, so a dangler may add or remove danglers while running.
//! Once-only hooks (such as shutdown) go through [`HookDispatcher::run_once`].

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use super::definitions::HookPoint;
use super::registry::HookRegistry;

/// Dispatches hook points to all registered danglers.
#[derive(Debug)]
pub struct HookDispatcher {
    /// Hook registry.
    registry: Arc<HookRegistry>,
    /// Hooks already fired through `run_once`.
    fired: Mutex<HashSet<HookPoint>>,
}

impl HookDispatcher {
    /// Creates a new hook dispatcher.
    pub fn new(registry: Arc<HookRegistry>) -> Self {
        Self {
            registry,
            fired: Mutex::new(HashSet::new()),
        }
    }

    /// Runs every dangler attached to `hook`. Returns how many ran.
    pub fn run(&self, hook: HookPoint) -> usize {
        let danglers = self.registry.get_danglers(hook);

        debug!(hook = %hook, dangler_count = danglers.len(), "Running hook");

        for dangler in &danglers {
            dangler(hook);
        }

        danglers.len()
    }

    /// Runs `hook` unless it already ran through this method.
    ///
    /// Returns `None` when the hook had already fired.
    pub fn run_once(&self, hook: HookPoint) -> Option<usize> {
        if !self.fired.lock().insert(hook) {
            info!(hook = %hook, "Hook already fired, skipping");
            return None;
        }

        Some(self.run(hook))
    }

    /// Checks whether `hook` has fired through `run_once`.
    pub fn has_fired(&self, hook: HookPoint) -> bool {
        self.fired.lock().contains(&hook)
    }

    /// Returns a reference to the hook registry.
    pub fn registry(&self) -> &Arc<HookRegistry> {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::registry::DanglerId;

    #[test]
    fn test_run_in_registration_order() {
        let hooks = Arc::new(HookRegistry::new());
        let order = Arc::new(Mutex::new(Vec::new()));

        for n in 1..=3 {
            let order = order.clone();
            hooks.add_dangler(HookPoint::UiStartup, move |hook| {
                order.lock().push((n, hook));
            });
        }

        let dispatcher = HookDispatcher::new(hooks);
        assert_eq!(dispatcher.run(HookPoint::UiStartup), 3);
        assert_eq!(
            *order.lock(),
            vec![
                (1, HookPoint::UiStartup),
                (2, HookPoint::UiStartup),
                (3, HookPoint::UiStartup)
            ]
        );
        assert_eq!(dispatcher.run(HookPoint::UiShutdown), 0);
    }

    #[test]
    fn test_run_once() {
        let hooks = Arc::new(HookRegistry::new());
        let count = Arc::new(Mutex::new(0));
        let c = count.clone();
        hooks.add_dangler(HookPoint::Shutdown, move |_| *c.lock() += 1);

        let dispatcher = HookDispatcher::new(hooks);
        assert!(!dispatcher.has_fired(HookPoint::Shutdown));
        assert_eq!(dispatcher.run_once(HookPoint::Shutdown), Some(1));
        assert_eq!(dispatcher.run_once(HookPoint::Shutdown), None);
        assert!(dispatcher.has_fired(HookPoint::Shutdown));
        assert_eq!(*count.lock(), 1);
    }

    #[test]
    fn test_dangler_may_remove_itself() {
        let hooks = Arc::new(HookRegistry::new());
        let slot: Arc<Mutex<Option<DanglerId>>> = Arc::new(Mutex::new(None));

        let weak = Arc::downgrade(&hooks);
        let s = slot.clone();
        let id = hooks.add_dangler(HookPoint::BookOpened, move |_| {
            if let (Some(hooks), Some(id)) = (weak.upgrade(), *s.lock()) {
                hooks.remove_dangler(id);
            }
        });
        *slot.lock() = Some(id);

        let dispatcher = HookDispatcher::new(hooks.clone());
        assert_eq!(dispatcher.run(HookPoint::BookOpened), 1);
        assert_eq!(dispatcher.run(HookPoint::BookOpened), 0);
    }
}
