//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::{Landing, LoginGate, Protected};
use crate::pages::{
    dashboard::DashboardPage, login::AdminLoginPage, user_login::UserLoginPage,
    user_participation::UserParticipationPage, user_profile::UserProfilePage,
};
use crate::session::guard::RouteGuard;
use crate::state::session::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, then routes. Admin screens sit behind
/// `RouteGuard::Admin`, participant screens behind `RouteGuard::User`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/reading-console.css"/>
        <Title text="Reading Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Landing/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <LoginGate guard=RouteGuard::Admin><AdminLoginPage/></LoginGate> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected guard=RouteGuard::Admin><DashboardPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("user"), StaticSegment("login"))
                    view=|| view! { <LoginGate guard=RouteGuard::User><UserLoginPage/></LoginGate> }
                />
                <Route
                    path=(StaticSegment("user"), StaticSegment("profile"))
                    view=|| view! { <Protected guard=RouteGuard::User><UserProfilePage/></Protected> }
                />
                <Route
                    path=(
                        StaticSegment("user"),
                        StaticSegment("semester"),
                        ParamSegment("semesterId"),
                        StaticSegment("group"),
                        ParamSegment("groupId"),
                        StaticSegment("participations"),
                    )
                    view=|| view! { <Protected guard=RouteGuard::User><UserParticipationPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
