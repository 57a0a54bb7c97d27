//! Participant home: the semesters and groups the signed-in person belongs to.

#[cfg(test)]
#[path = "user_profile_test.rs"]
mod user_profile_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::participant;
use crate::net::types::UserSemester;
use crate::routes;
use crate::session::credential::Domain;
use crate::state::session::{logout, use_session};

const GROUP_COLORS: [&str; 8] = ["#667eea", "#764ba2", "#4facfe", "#43e97b", "#fa709a", "#30cfd0", "#f093fb", "#fee140"];

/// Up to two uppercase initials, one per word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Stable accent color per group id.
pub fn group_color(group_id: i64) -> &'static str {
    let len = i64::try_from(GROUP_COLORS.len()).unwrap_or(1);
    let index = usize::try_from(group_id.rem_euclid(len)).unwrap_or(0);
    GROUP_COLORS[index]
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Load {
    Loading,
    Ready(Vec<UserSemester>),
    Failed(String),
}

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let session = use_session();
    let name = session.user.name().unwrap_or_default();
    let state = RwSignal::new(Load::Loading);

    let fetch_session = session.clone();
    Effect::new(move || {
        let Some(person_id) = fetch_session.user.id() else {
            state.set(Load::Failed("Not logged in. Please login again.".to_owned()));
            return;
        };
        let http = fetch_session.http.clone();
        leptos::task::spawn_local(async move {
            match participant::semesters(&http, person_id).await {
                Ok(summary) => state.set(Load::Ready(summary.semesters)),
                Err(e) => state.set(Load::Failed(format!("Failed to load profile data: {}", e.display_message()))),
            }
        });
    });

    let on_logout = move |_| logout(&session, Domain::User);
    let avatar = initials(&name);

    view! {
        <div class="up-container">
            <div class="up-hero">
                <div class="up-hero-inner">
                    <div class="up-avatar">{avatar}</div>
                    <div class="up-hero-text">
                        <h1 class="up-name">{name}</h1>
                        <p class="up-meta">
                            {move || match state.get() {
                                Load::Ready(semesters) => format!("{} semesters", semesters.len()),
                                _ => String::new(),
                            }}
                        </p>
                    </div>
                    <button class="up-logout-btn" on:click=on_logout>"Logout"</button>
                </div>
            </div>
            <div class="up-content">
                {move || match state.get() {
                    Load::Loading => view! { <p class="up-loading-state">"Loading profile..."</p> }.into_any(),
                    Load::Failed(message) => view! { <p class="up-error-card">{message}</p> }.into_any(),
                    Load::Ready(semesters) if semesters.is_empty() => view! {
                        <div class="up-empty">
                            <h3>"No semesters yet"</h3>
                            <p>"Ask an administrator to enroll you in a semester."</p>
                        </div>
                    }
                    .into_any(),
                    Load::Ready(semesters) => semesters
                        .into_iter()
                        .map(|semester| view! { <SemesterBlock semester=semester/> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn SemesterBlock(semester: UserSemester) -> impl IntoView {
    let semester_id = semester.semester_id;
    view! {
        <div class="up-semester-block">
            <div class="up-semester-label">
                <h2>{semester.semester_name}</h2>
            </div>
            <div class="up-groups">
                {semester
                    .groups
                    .into_iter()
                    .map(|group| {
                        let color = group_color(group.group_id);
                        view! {
                            <A href=routes::user_participations(semester_id, group.group_id) attr:class="up-group-row">
                                <div class="up-group-accent" style:background=color></div>
                                <div class="up-group-info">
                                    <span class="up-group-name">{group.group_name}</span>
                                    <span class="up-group-sub">"Attendance and records"</span>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
