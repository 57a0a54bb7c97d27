//! Participant auth domain.
//!
//! The participant session is the user record plus the [`SessionKind::User`]
//! marker; both must be present for [`UserAuth::is_authenticated`]. Login
//! writes record then marker, logout removes marker then record, so a crash
//! between the two writes never leaves a session that looks active.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::Deserialize;

use super::LoginError;
use super::admin::LoginRequest;
use super::credential::{Domain, SessionKind, UserCredential};
use super::events::AuthEvents;
use super::store::TokenStore;
use crate::net::http::{HttpClient, Transport};

pub const USER_LOGIN_ENDPOINT: &str = "/user/login";

/// `{token, adminId, username}`: the server reuses the admin field names,
/// with `adminId` carrying the person id and `username` the display name.
#[derive(Deserialize)]
struct UserLoginResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(rename = "adminId", default)]
    person_id: Option<i64>,
    #[serde(default)]
    username: String,
}

impl UserLoginResponse {
    fn into_credential(self) -> Result<UserCredential, LoginError> {
        let token = self.token.filter(|t| !t.is_empty()).ok_or(LoginError::MissingToken)?;
        let id = self.person_id.ok_or(LoginError::MissingId)?;
        Ok(UserCredential { token, id, name: self.username })
    }
}

/// Login, logout and synchronous queries for the participant session.
#[derive(Clone)]
pub struct UserAuth {
    store: TokenStore,
    events: AuthEvents,
}

impl UserAuth {
    pub fn new(store: TokenStore, events: AuthEvents) -> Self {
        Self { store, events }
    }

    /// `POST /user/login` with the participant's display name and password.
    ///
    /// # Errors
    ///
    /// Same kinds as admin login; nothing is left behind on error.
    pub async fn login<T: Transport>(
        &self,
        http: &HttpClient<T>,
        name: &str,
        password: &str,
    ) -> Result<UserCredential, LoginError> {
        let payload = LoginRequest { username: name, password };
        let outcome = http.post_login::<_, UserLoginResponse>(USER_LOGIN_ENDPOINT, &payload).await;
        let credential = match outcome {
            Ok(resp) => resp.into_credential(),
            Err(e) => Err(LoginError::from(e)),
        }
        .inspect_err(|e| leptos::logging::warn!("participant login failed: {e}"))?;

        self.store
            .set_user(&credential)
            .inspect_err(|e| leptos::logging::warn!("participant session not saved: {e}"))?;
        if let Err(e) = self.store.set_session_kind(SessionKind::User) {
            leptos::logging::warn!("participant session marker not saved: {e}");
            self.store.clear(Domain::User);
            return Err(e.into());
        }
        leptos::logging::log!("participant {} signed in", credential.id);
        self.events.emit();
        Ok(credential)
    }

    /// Drop the participant session. Safe to call when signed out.
    pub fn logout(&self) {
        self.store.clear_session_kind();
        self.store.clear(Domain::User);
        self.events.emit();
    }

    pub fn current(&self) -> Option<UserCredential> {
        self.store.user()
    }

    /// Stored token, whether or not the marker is set.
    pub fn token(&self) -> Option<String> {
        self.current().map(|c| c.token)
    }

    /// Person id used in `/user/{id}/...` paths.
    pub fn id(&self) -> Option<i64> {
        self.current().map(|c| c.id)
    }

    pub fn name(&self) -> Option<String> {
        self.current().map(|c| c.name)
    }

    /// Whether the discriminator currently marks a participant session.
    pub fn has_active_marker(&self) -> bool {
        self.store.session_kind() == Some(SessionKind::User)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.has_active_marker()
    }
}
