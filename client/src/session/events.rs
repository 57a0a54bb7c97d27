//! Same-tab "authentication changed" signal.
//!
//! Browsers only deliver `storage` events to *other* tabs, so a login in the
//! current tab needs its own notification. Auth services emit after every
//! successful login and every logout; the session observer listens.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::{Arc, Mutex, PoisonError};

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`AuthEvents::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(u64);

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

/// Per-tab pub/sub channel. Clones share listeners.
#[derive(Clone, Default)]
pub struct AuthEvents {
    listeners: Arc<Mutex<Listeners>>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> ListenerId {
        let mut guard = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let id = ListenerId(guard.next_id);
        guard.next_id += 1;
        guard.entries.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .retain(|(entry_id, _)| *entry_id != id);
    }

    /// Notify every listener synchronously.
    ///
    /// Listeners run after the lock is released and may subscribe or emit.
    pub fn emit(&self) {
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }
}
