//! Session observer: one live snapshot of both auth domains.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth services are pull-based and synchronous. The observer turns them
//! into a push model for the UI by re-reading both services whenever
//!
//! - it is mounted,
//! - another tab changes a session key (`storage` event, delivered through
//!   [`SessionObserver::handle_storage_change`]),
//! - this tab logs in or out ([`AuthEvents`]).
//!
//! Subscribers run synchronously inside the triggering call, so a login is
//! reflected before the caller navigates.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

use super::admin::AdminAuth;
use super::events::{AuthEvents, ListenerId};
use super::store::TokenStore;
use super::user::UserAuth;

/// Authentication state of both domains at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub admin_authenticated: bool,
    pub user_authenticated: bool,
    /// False until the observer has read browser storage (e.g. during SSR).
    pub loaded: bool,
}

type SnapshotListener = Arc<dyn Fn(SessionSnapshot) + Send + Sync>;

#[derive(Default)]
struct ObserverState {
    snapshot: SessionSnapshot,
    listeners: Vec<SnapshotListener>,
    auth_listener: Option<ListenerId>,
}

struct Inner {
    admin: AdminAuth,
    user: UserAuth,
    events: AuthEvents,
    state: Mutex<ObserverState>,
}

/// Shared handle; clones observe the same state.
#[derive(Clone)]
pub struct SessionObserver {
    inner: Arc<Inner>,
}

impl SessionObserver {
    pub fn new(admin: AdminAuth, user: UserAuth, events: AuthEvents) -> Self {
        let inner = Inner { admin, user, events, state: Mutex::new(ObserverState::default()) };
        Self { inner: Arc::new(inner) }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot
    }

    /// Register a callback invoked with each new snapshot.
    pub fn subscribe(&self, listener: impl Fn(SessionSnapshot) + Send + Sync + 'static) {
        self.lock().listeners.push(Arc::new(listener));
    }

    /// Start listening for same-tab auth changes and take the first reading.
    /// Mounting twice keeps a single listener.
    pub fn mount(&self) -> SessionSnapshot {
        let needs_listener = self.lock().auth_listener.is_none();
        if needs_listener {
            let weak: Weak<Inner> = Arc::downgrade(&self.inner);
            let id = self.inner.events.subscribe(move || {
                if let Some(inner) = weak.upgrade() {
                    SessionObserver { inner }.refresh();
                }
            });
            self.lock().auth_listener = Some(id);
        }
        self.refresh()
    }

    /// Stop listening for same-tab auth changes.
    pub fn unmount(&self) {
        if let Some(id) = self.lock().auth_listener.take() {
            self.inner.events.unsubscribe(id);
        }
    }

    /// Cross-tab notification. `key` is `None` when storage was cleared
    /// wholesale; keys that are not session keys are ignored.
    pub fn handle_storage_change(&self, key: Option<&str>) {
        if key.map_or(true, TokenStore::is_session_key) {
            self.refresh();
        }
    }

    /// Re-read both services, notifying subscribers if anything changed.
    pub fn refresh(&self) -> SessionSnapshot {
        let next = SessionSnapshot {
            admin_authenticated: self.inner.admin.is_authenticated(),
            user_authenticated: self.inner.user.is_authenticated(),
            loaded: true,
        };
        let listeners = {
            let mut state = self.lock();
            if state.snapshot == next {
                return next;
            }
            state.snapshot = next;
            state.listeners.clone()
        };
        for listener in listeners {
            listener(next);
        }
        next
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ObserverState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
