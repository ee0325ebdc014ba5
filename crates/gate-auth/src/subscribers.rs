//! Ordered callback registry behind [`crate::AuthStore::subscribe`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::AuthState;

type Callback = dyn Fn(&AuthState) + Send + Sync;

#[derive(Clone)]
pub struct Listener {
    active: Arc<AtomicBool>,
    callback: Arc<Callback>,
}

impl Listener {
    fn new<F>(callback: F) -> Self
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        Self {
            active: Arc::new(AtomicBool::new(true)),
            callback: Arc::new(callback),
        }
    }

    /// Invoke the callback unless it has been unsubscribed.
    pub fn notify(&self, state: &AuthState) {
        if self.active.load(Ordering::Acquire) {
            (self.callback)(state);
        }
    }
}

#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

impl Listeners {
    /// Append a callback. Returns its listener and registry id.
    pub fn register<F>(&mut self, callback: F) -> (u64, Listener)
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        let listener = Listener::new(callback);
        self.entries.push((id, listener.clone()));
        (id, listener)
    }

    fn remove(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Listeners in registration order.
    pub fn ordered(&self) -> Vec<Listener> {
        self.entries.iter().map(|(_, l)| l.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle returned by `subscribe`. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes its callback"]
pub struct Subscription {
    id: u64,
    active: Arc<AtomicBool>,
    listeners: Weak<Mutex<Listeners>>,
}

impl Subscription {
    pub(crate) fn new(id: u64, listener: &Listener, listeners: &Arc<Mutex<Listeners>>) -> Self {
        Self {
            id,
            active: Arc::clone(&listener.active),
            listeners: Arc::downgrade(listeners),
        }
    }

    /// Stop receiving updates.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Cleared first so an in-progress notification pass skips it.
        self.active.store(false, Ordering::Release);
        if let Some(listeners) = self.listeners.upgrade() {
            lock(&listeners).remove(self.id);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("registered", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active.load(Ordering::Acquire))
            .finish()
    }
}
