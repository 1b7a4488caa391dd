//! Observer signals — a plain list of callbacks invoked synchronously.
//!
//! Observers run in registration order on the calling thread. The observer
//! list is snapshotted before emission, so a callback may connect or
//! disconnect observers (including itself) without deadlocking.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::trace;

/// Handle returned by [`Signal::connect`], used to disconnect later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A named notification channel carrying a `T` payload.
pub struct Signal<T> {
    name: &'static str,
    next_id: AtomicU64,
    observers: Mutex<Vec<(SubscriptionId, Observer<T>)>>,
}

impl<T> Signal<T> {
    /// Creates a signal with no observers.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            next_id: AtomicU64::new(1),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Returns the signal name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registers an observer. Observers fire in the order they connected.
    pub fn connect<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.lock().push((id, Arc::new(observer)));
        trace!(signal = self.name, subscription = id.0, "Observer connected");
        id
    }

    /// Removes an observer. Returns `false` if the id was not connected.
    pub fn disconnect(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.lock();
        let before = observers.len();
        observers.retain(|(sid, _)| *sid != id);
        before != observers.len()
    }

    /// Invokes every connected observer with `value`.
    ///
    /// Returns the number of observers invoked.
    pub fn emit(&self, value: &T) -> usize {
        let snapshot: Vec<Observer<T>> = self
            .observers
            .lock()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();

        for observer in &snapshot {
            observer(value);
        }

        trace!(signal = self.name, observers = snapshot.len(), "Signal emitted");
        snapshot.len()
    }

    /// Returns the number of connected observers.
    pub fn observer_count(&self) -> usize {
        self.observers.lock().len()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("observers", &self.observer_count())
            .finish()
    }
}
