//! Participant login screen.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::login_form::LoginForm;
use crate::routes;
use crate::session::credential::Domain;

#[component]
pub fn UserLoginPage() -> impl IntoView {
    view! {
        <div class="login-page login-page--user">
            <div class="login-card">
                <h1>"Reading Console"</h1>
                <p class="login-card__subtitle">"Sign in with the name your group leader registered"</p>
                <LoginForm domain=Domain::User/>
                <div class="login-divider"></div>
                <A href=routes::ADMIN_LOGIN attr:class="login-link">"Administrator login"</A>
            </div>
        </div>
    }
}
