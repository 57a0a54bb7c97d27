//! Client-side session model for the two auth domains.
//!
//! ARCHITECTURE
//! ============
//! Admin and participant sessions are independent: each has its own record
//! in the [`store::TokenStore`], its own service, and either or both may be
//! signed in at once. The [`observer::SessionObserver`] mirrors both into one
//! snapshot, and [`guard::RouteGuard`] decides navigation from that snapshot.
//!
//! [`Session`] wires the pieces together over one storage backend, one
//! navigator and one transport.

pub mod admin;
pub mod credential;
pub mod events;
pub mod guard;
pub mod observer;
pub mod storage;
pub mod store;
pub mod user;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use self::admin::AdminAuth;
use self::credential::Domain;
use self::events::AuthEvents;
use self::observer::SessionObserver;
use self::storage::{LocalStorage, StorageBackend, StorageError};
use self::store::TokenStore;
use self::user::UserAuth;
use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::net::http::{BrowserTransport, HttpClient, Transport};
use crate::util::navigate::{BrowserNavigator, Navigator};

/// Why a login attempt did not produce a session.
///
/// Nothing is persisted for any variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// 401 from the login endpoint.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// 403 from the login endpoint: the account was soft-deleted.
    #[error("account disabled")]
    AccountDisabled,
    #[error("login response did not include a token")]
    MissingToken,
    #[error("login response did not include an id")]
    MissingId,
    #[error("could not persist session: {0}")]
    Storage(#[from] StorageError),
    /// Any other status, or a network/decode failure.
    #[error("login failed: {0}")]
    Failed(String),
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::InvalidCredentials,
            ApiError::Forbidden(_) => Self::AccountDisabled,
            other => Self::Failed(other.display_message()),
        }
    }
}

impl LoginError {
    /// Inline copy for the login form of `domain`.
    pub fn user_message(&self, domain: Domain) -> String {
        match (self, domain) {
            (Self::InvalidCredentials, Domain::Admin) => "Invalid username or password. Please try again.".to_owned(),
            (Self::InvalidCredentials, Domain::User) => "Invalid name or password. Please try again.".to_owned(),
            (Self::AccountDisabled, _) => "Your account has been deleted. Please contact an administrator.".to_owned(),
            (Self::MissingToken | Self::MissingId, _) => {
                "Login failed: the server sent an incomplete response. Please try again.".to_owned()
            }
            (Self::Storage(_), _) => {
                "Could not save your session in this browser. Check that site storage is enabled.".to_owned()
            }
            (Self::Failed(message), _) if !message.is_empty() => message.clone(),
            _ => "Login failed. Please check your credentials.".to_owned(),
        }
    }
}

/// Everything one browser tab needs to authenticate and talk to the API.
#[derive(Clone)]
pub struct Session<T = BrowserTransport> {
    pub store: TokenStore,
    pub events: AuthEvents,
    pub admin: AdminAuth,
    pub user: UserAuth,
    pub http: HttpClient<T>,
    pub observer: SessionObserver,
}

impl<T: Transport> Session<T> {
    pub fn new(
        backend: Arc<dyn StorageBackend>,
        navigator: Arc<dyn Navigator>,
        config: ApiConfig,
        transport: T,
    ) -> Self {
        let store = TokenStore::new(backend);
        let events = AuthEvents::new();
        let admin = AdminAuth::new(store.clone(), events.clone());
        let user = UserAuth::new(store.clone(), events.clone());
        let http = HttpClient::new(config, admin.clone(), user.clone(), navigator, transport);
        let observer = SessionObserver::new(admin.clone(), user.clone(), events.clone());
        Self { store, events, admin, user, http, observer }
    }

    /// Admin login against this session's HTTP client.
    ///
    /// # Errors
    ///
    /// See [`LoginError`].
    pub async fn login_admin(&self, username: &str, password: &str) -> Result<credential::AdminCredential, LoginError> {
        self.admin.login(&self.http, username, password).await
    }

    /// Participant login against this session's HTTP client.
    ///
    /// # Errors
    ///
    /// See [`LoginError`].
    pub async fn login_user(&self, name: &str, password: &str) -> Result<credential::UserCredential, LoginError> {
        self.user.login(&self.http, name, password).await
    }
}

impl Session {
    /// Browser wiring: `localStorage`, `window.location`, `fetch`.
    pub fn browser() -> Self {
        Self::new(
            Arc::new(LocalStorage),
            Arc::new(BrowserNavigator),
            ApiConfig::from_build_env(),
            BrowserTransport,
        )
    }
}
