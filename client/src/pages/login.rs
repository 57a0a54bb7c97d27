//! Admin login screen.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::login_form::LoginForm;
use crate::routes;
use crate::session::credential::Domain;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Reading Console"</h1>
                <p class="login-card__subtitle">"Administrator sign in"</p>
                <LoginForm domain=Domain::Admin/>
                <div class="login-divider"></div>
                <A href=routes::USER_LOGIN attr:class="login-link">"Participant login"</A>
            </div>
        </div>
    }
}
