//! Session context: the tab's [`Session`] plus a live snapshot signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls [`provide_session`] once. The observer stays unloaded during
//! server rendering so guards render a pending state instead of redirecting;
//! after hydration an effect mounts it and installs the `storage` listener
//! that carries changes from other tabs.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::http::Transport;
use crate::session::Session;
use crate::session::credential::Domain;
use crate::session::observer::{SessionObserver, SessionSnapshot};

/// Mirror every observer change into `signal`.
pub fn bind_snapshot(observer: &SessionObserver, signal: RwSignal<SessionSnapshot>) {
    signal.set(observer.snapshot());
    observer.subscribe(move |next| {
        let _ = signal.try_set(next);
    });
}

/// Create the browser session and provide it plus its snapshot signal.
pub fn provide_session() -> RwSignal<SessionSnapshot> {
    let session = Session::browser();
    let snapshot = RwSignal::new(SessionSnapshot::default());
    bind_snapshot(&session.observer, snapshot);

    #[cfg(feature = "hydrate")]
    {
        let observer = session.observer.clone();
        Effect::new(move || {
            observer.mount();
        });

        let listener_observer = session.observer.clone();
        let handle = window_event_listener(leptos::ev::storage, move |ev| {
            listener_observer.handle_storage_change(ev.key().as_deref());
        });
        let cleanup_observer = session.observer.clone();
        on_cleanup(move || {
            handle.remove();
            cleanup_observer.unmount();
        });
    }

    provide_context(session);
    provide_context(snapshot);
    snapshot
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}

pub fn use_snapshot() -> RwSignal<SessionSnapshot> {
    expect_context::<RwSignal<SessionSnapshot>>()
}

/// Sign out of the given domain; the snapshot follows through the observer.
pub fn logout<T: Transport>(session: &Session<T>, domain: Domain) {
    match domain {
        Domain::Admin => session.admin.logout(),
        Domain::User => session.user.logout(),
    }
}
