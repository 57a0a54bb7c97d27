//! Credential form shared by the admin and participant login screens.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is rendered inline from [`LoginError::user_message`]; a
//! rejected login never touches the stored sessions and never redirects.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::LoginError;
use crate::session::credential::Domain;
use crate::session::guard::RouteGuard;
use crate::state::session::use_session;

/// Trimmed identifier and untouched password, or the inline prompt.
pub fn validate_login_input(domain: Domain, identifier: &str, password: &str) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || password.is_empty() {
        return Err(match domain {
            Domain::Admin => "Please enter username and password.",
            Domain::User => "Please enter name and password.",
        });
    }
    Ok((identifier.to_owned(), password.to_owned()))
}

fn identifier_label(domain: Domain) -> &'static str {
    match domain {
        Domain::Admin => "Username",
        Domain::User => "Name",
    }
}

#[component]
pub fn LoginForm(domain: Domain) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name, secret) = match validate_login_input(domain, &identifier.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result: Result<(), LoginError> = match domain {
                Domain::Admin => session.login_admin(&name, &secret).await.map(|_| ()),
                Domain::User => session.login_user(&name, &secret).await.map(|_| ()),
            };
            match result {
                Ok(()) => navigate(RouteGuard::from(domain).home_path(), NavigateOptions::default()),
                Err(e) => {
                    error.set(e.user_message(domain));
                    password.set(String::new());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <label class="login-label">
                {identifier_label(domain)}
                <input
                    class="login-input"
                    type="text"
                    autocomplete="username"
                    prop:value=move || identifier.get()
                    on:input=move |ev| identifier.set(event_target_value(&ev))
                />
            </label>
            <label class="login-label">
                "Password"
                <input
                    class="login-input"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || !error.get().is_empty()>
                <p class="login-message login-message--error">{move || error.get()}</p>
            </Show>
            <button class="login-button" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Logging in..." } else { "Login" }}
            </button>
        </form>
    }
}
