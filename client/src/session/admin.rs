//! Admin auth domain.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::{Deserialize, Serialize};

use super::LoginError;
use super::credential::{AdminCredential, AdminRole, Domain};
use super::events::AuthEvents;
use super::store::TokenStore;
use crate::net::http::{HttpClient, Transport};

pub const ADMIN_LOGIN_ENDPOINT: &str = "/auth/login";

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
struct AdminLoginResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(default, alias = "adminId")]
    id: Option<i64>,
    #[serde(default)]
    username: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    role: AdminRole,
}

impl AdminLoginResponse {
    fn into_credential(self) -> Result<AdminCredential, LoginError> {
        let token = self.token.filter(|t| !t.is_empty()).ok_or(LoginError::MissingToken)?;
        let id = self.id.ok_or(LoginError::MissingId)?;
        Ok(AdminCredential { token, id, username: self.username, name: self.name, role: self.role })
    }
}

/// Login, logout and synchronous queries for the admin session.
#[derive(Clone)]
pub struct AdminAuth {
    store: TokenStore,
    events: AuthEvents,
}

impl AdminAuth {
    pub fn new(store: TokenStore, events: AuthEvents) -> Self {
        Self { store, events }
    }

    /// `POST /auth/login` and persist the returned credential.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` on 401, `AccountDisabled` on 403, `MissingToken`
    /// or `MissingId` when the response lacks either, `Storage` when the
    /// record cannot be written, `Failed` otherwise. No state is written on
    /// error.
    pub async fn login<T: Transport>(
        &self,
        http: &HttpClient<T>,
        username: &str,
        password: &str,
    ) -> Result<AdminCredential, LoginError> {
        let payload = LoginRequest { username, password };
        let outcome = http.post_login::<_, AdminLoginResponse>(ADMIN_LOGIN_ENDPOINT, &payload).await;
        let credential = match outcome {
            Ok(resp) => resp.into_credential(),
            Err(e) => Err(LoginError::from(e)),
        }
        .inspect_err(|e| leptos::logging::warn!("admin login failed: {e}"))?;

        self.store
            .set_admin(&credential)
            .inspect_err(|e| leptos::logging::warn!("admin session not saved: {e}"))?;
        leptos::logging::log!("admin {} signed in as {}", credential.username, credential.role.as_str());
        self.events.emit();
        Ok(credential)
    }

    /// Drop the admin credential. Safe to call when signed out.
    pub fn logout(&self) {
        self.store.clear(Domain::Admin);
        self.events.emit();
    }

    pub fn current(&self) -> Option<AdminCredential> {
        self.store.admin()
    }

    pub fn token(&self) -> Option<String> {
        self.current().map(|c| c.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn role(&self) -> Option<AdminRole> {
        self.current().map(|c| c.role)
    }
}
