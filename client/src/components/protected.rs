//! Route wrappers that turn guard decisions into views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route in `app` is wrapped here, so there is exactly one
//! place that maps a [`RouteDecision`] to render / redirect / wait. The
//! decision itself is pure and lives in `session::guard`.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::guard::{RouteDecision, RouteGuard, landing_decision};
use crate::state::session::use_snapshot;

fn render(decision: RouteDecision, children: &ChildrenFn) -> AnyView {
    match decision {
        RouteDecision::Allow => children().into_any(),
        RouteDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        RouteDecision::Pending => view! { <div class="route-pending" aria-busy="true"></div> }.into_any(),
    }
}

/// Render `children` only while the guard's session is signed in.
#[component]
pub fn Protected(guard: RouteGuard, children: ChildrenFn) -> impl IntoView {
    let snapshot = use_snapshot();
    let decision = Memo::new(move |_| guard.evaluate(snapshot.get()));
    move || render(decision.get(), &children)
}

/// Login screen wrapper: an already signed-in visitor is sent home.
#[component]
pub fn LoginGate(guard: RouteGuard, children: ChildrenFn) -> impl IntoView {
    let snapshot = use_snapshot();
    let decision = Memo::new(move |_| guard.evaluate_login_page(snapshot.get()));
    move || render(decision.get(), &children)
}

/// `/`: pick the dashboard, the participant profile, or participant login.
#[component]
pub fn Landing() -> impl IntoView {
    let snapshot = use_snapshot();
    let decision = Memo::new(move |_| landing_decision(snapshot.get()));
    let nothing: ChildrenFn = std::sync::Arc::new(|| ().into_any());
    move || render(decision.get(), &nothing)
}
