//! Admin dashboard: entry points into each management area.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated admin landing route. Sections the signed-in role cannot
//! use are shown disabled rather than hidden so operators know they exist.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::dashboard_header::DashboardHeader;
use crate::net::api::{books, groups, persons, semesters};
use crate::session::credential::AdminRole;
use crate::state::session::{use_session, use_snapshot};

/// One management area on the dashboard grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardSection {
    pub title: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

/// Cards for `role`; only superadmins and admins manage operator accounts.
pub fn dashboard_sections(role: AdminRole) -> Vec<DashboardSection> {
    let section = |title, description, enabled| DashboardSection { title, description, enabled };
    vec![
        section("Admins", "Manage admin accounts and permissions", role.can_manage_admins()),
        section("Groups", "Manage reading groups and their members", true),
        section("Persons", "Manage participants and their passwords", true),
        section("Semesters", "Manage semesters and assign groups and books", true),
        section("Books", "Manage the book library", true),
        section("Participations", "Review attendance and weekly records", true),
    ]
}

/// Headline counts shown above the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub groups: usize,
    pub persons: usize,
    pub semesters: usize,
    pub books: usize,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let snapshot = use_snapshot();
    let totals = RwSignal::new(None::<Totals>);
    let error = RwSignal::new(String::new());

    let role_session = session.clone();
    let role = Memo::new(move |_| {
        snapshot.track();
        role_session.admin.role().unwrap_or_default()
    });

    Effect::new(move || {
        let http = session.http.clone();
        leptos::task::spawn_local(async move {
            let loaded = async {
                Ok::<_, crate::net::error::ApiError>(Totals {
                    groups: groups::list(&http).await?.len(),
                    persons: persons::list(&http).await?.len(),
                    semesters: semesters::list(&http).await?.len(),
                    books: books::list(&http).await?.len(),
                })
            }
            .await;
            match loaded {
                Ok(t) => totals.set(Some(t)),
                Err(e) => error.set(e.display_message()),
            }
        });
    });

    view! {
        <div class="dashboard-container">
            <DashboardHeader/>
            <div class="dashboard-content">
                <div class="dashboard-header">
                    <h1>"Admin Dashboard"</h1>
                    <p>"Manage your reading groups, semesters, and participants"</p>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <p class="dashboard-error">{move || error.get()}</p>
                </Show>
                {move || totals.get().map(|t| view! {
                    <div class="dashboard-totals">
                        <span>{t.groups} " groups"</span>
                        <span>{t.persons} " persons"</span>
                        <span>{t.semesters} " semesters"</span>
                        <span>{t.books} " books"</span>
                    </div>
                })}
                <div class="dashboard-grid">
                    {move || {
                        dashboard_sections(role.get())
                            .into_iter()
                            .map(|s| {
                                let class = if s.enabled { "dashboard-card" } else { "dashboard-card dashboard-card--disabled" };
                                view! {
                                    <div class=class>
                                        <h3>{s.title}</h3>
                                        <p>{s.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
