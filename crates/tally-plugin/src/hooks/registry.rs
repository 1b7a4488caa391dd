//! Hook registry — components register dangler callbacks by hook point.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::debug;

use super::definitions::HookPoint;

/// Identifies a registered dangler so it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DanglerId(u64);

/// Callback attached to a hook point.
pub type Dangler = Arc<dyn Fn(HookPoint) + Send + Sync>;

/// Entry in the hook registry.
struct DanglerEntry {
    id: DanglerId,
    callback: Dangler,
}

/// Registry of danglers organized by hook point, in registration order.
pub struct HookRegistry {
    next_id: AtomicU64,
    danglers: Mutex<HashMap<HookPoint, Vec<DanglerEntry>>>,
}

impl HookRegistry {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            danglers: Mutex::new(HashMap::new()),
        }
    }

    /// Appends a dangler to a hook point.
    pub fn add_dangler<F>(&self, hook: HookPoint, callback: F) -> DanglerId
    where
        F: Fn(HookPoint) + Send + Sync + 'static,
    {
        let id = DanglerId(self.next_id.fetch_add(1, Ordering::Relaxed));

        self.danglers
            .lock()
            .entry(hook)
            .or_default()
            .push(DanglerEntry {
                id,
                callback: Arc::new(callback),
            });

        debug!(hook = %hook, dangler = id.0, "Hook dangler registered");
        id
    }

    /// Removes a dangler. Returns `false` if it was not registered.
    pub fn remove_dangler(&self, id: DanglerId) -> bool {
        let mut danglers = self.danglers.lock();
        let mut removed = false;

        for entries in danglers.values_mut() {
            let before = entries.len();
            entries.retain(|e| e.id != id);
            removed |= before != entries.len();
        }

        // Remove empty hook entries
        danglers.retain(|_, entries| !entries.is_empty());

        if removed {
            debug!(dangler = id.0, "Hook dangler removed");
        }
        removed
    }

    /// Returns the danglers for a hook point, in registration order.
    pub fn get_danglers(&self, hook: HookPoint) -> Vec<Dangler> {
        self.danglers
            .lock()
            .get(&hook)
            .map(|entries| entries.iter().map(|e| e.callback.clone()).collect())
            .unwrap_or_default()
    }

    /// Returns the number of danglers registered for a hook point.
    pub fn dangler_count(&self, hook: HookPoint) -> usize {
        self.danglers
            .lock()
            .get(&hook)
            .map(|entries| entries.len())
            .unwrap_or(0)
    }

    /// Returns all hook points with at least one dangler.
    pub fn registered_hooks(&self) -> Vec<HookPoint> {
        let danglers = self.danglers.lock();
        HookPoint::ALL
            .iter()
            .copied()
            .filter(|hook| danglers.contains_key(hook))
            .collect()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<HookPoint, usize> = self
            .danglers
            .lock()
            .iter()
            .map(|(hook, entries)| (*hook, entries.len()))
            .collect();
        f.debug_struct("HookRegistry")
            .field("danglers", &counts)
            .finish()
    }
}
