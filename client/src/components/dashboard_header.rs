//! Admin navigation bar: greeting, dashboard link, logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;
use crate::session::credential::Domain;
use crate::state::session::{logout, use_session, use_snapshot};

#[component]
pub fn DashboardHeader() -> impl IntoView {
    let session = use_session();
    let snapshot = use_snapshot();

    // Re-read on every snapshot change so another tab's re-login shows up.
    let admin_session = session.clone();
    let admin = Memo::new(move |_| {
        snapshot.track();
        admin_session.admin.current()
    });
    let name = move || admin.get().map(|a| a.name).unwrap_or_default();
    let role = move || admin.get().map(|a| a.role.as_str()).unwrap_or_default();

    let on_logout = move |_| logout(&session, Domain::Admin);

    view! {
        <nav class="dashboard-nav">
            <div class="nav-brand">
                <h2>"Reading Console"</h2>
            </div>
            <div class="nav-user">
                <span>"Welcome, " {name}</span>
                <span class="nav-role">{role}</span>
                <A href=routes::DASHBOARD attr:class="back-button">"Dashboard"</A>
                <button class="logout-button" on:click=on_logout>"Logout"</button>
            </div>
        </nav>
    }
}
