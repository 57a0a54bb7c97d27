//! Single HTTP gateway for every REST call.
//!
//! SYSTEM CONTEXT
//! ==============
//! All endpoint helpers in `net::api` and both auth services go through
//! [`HttpClient`]. It owns the two interceptor rules:
//!
//! - request: attach `Authorization: Bearer <token>` using the admin token,
//!   else the participant token, else nothing;
//! - response: on 401, clear the session whose token was rejected and hard
//!   navigate to that domain's login screen.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: [`BrowserTransport`] reports a network
//! error; tests swap in their own [`Transport`].
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError`] values. The 401 reaction is a side
//! effect on top of returning `ApiError::Unauthorized`; clearing credentials
//! never sends a request, so it cannot re-trigger itself.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ApiConfig;
use crate::session::admin::AdminAuth;
use crate::session::credential::Domain;
use crate::session::user::UserAuth;
use crate::util::navigate::Navigator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Fully resolved outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Wire-level request executor.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method as FetchMethod, RequestBuilder};

            let method = match request.method {
                Method::Get => FetchMethod::GET,
                Method::Post => FetchMethod::POST,
                Method::Put => FetchMethod::PUT,
                Method::Delete => FetchMethod::DELETE,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}

/// Whether a 401 on this request should run the global logout handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OnUnauthorized {
    Expire,
    /// Login calls: a 401 means bad credentials and is rendered inline.
    Report,
}

/// Credential that was attached to an outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Bearer {
    domain: Domain,
    token: String,
}

/// The console's REST client.
#[derive(Clone)]
pub struct HttpClient<T = BrowserTransport> {
    config: ApiConfig,
    admin: AdminAuth,
    user: UserAuth,
    navigator: Arc<dyn Navigator>,
    transport: T,
}

impl<T: Transport> HttpClient<T> {
    pub fn new(config: ApiConfig, admin: AdminAuth, user: UserAuth, navigator: Arc<dyn Navigator>, transport: T) -> Self {
        Self { config, admin, user, navigator, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let resp = self.execute(Method::Get, path, None, OnUnauthorized::Expire).await?;
        decode(&resp)
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let resp = self
            .execute(Method::Post, path, Some(encode(body)?), OnUnauthorized::Expire)
            .await?;
        decode(&resp)
    }

    /// `POST path` without a body (association endpoints use query parameters).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let resp = self.execute(Method::Post, path, None, OnUnauthorized::Expire).await?;
        decode(&resp)
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let resp = self
            .execute(Method::Put, path, Some(encode(body)?), OnUnauthorized::Expire)
            .await?;
        decode(&resp)
    }

    /// `PUT path` without a body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let resp = self.execute(Method::Put, path, None, OnUnauthorized::Expire).await?;
        decode(&resp)
    }

    /// `DELETE path`; any response body is ignored.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, None, OnUnauthorized::Expire).await?;
        Ok(())
    }

    /// `POST` for login endpoints: a 401 is returned without touching sessions.
    pub(crate) async fn post_login<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let resp = self
            .execute(Method::Post, path, Some(encode(body)?), OnUnauthorized::Report)
            .await?;
        decode(&resp)
    }

    /// Request interceptor: admin token first, then the participant token.
    fn resolve_bearer(&self) -> Option<Bearer> {
        if let Some(token) = self.admin.token() {
            return Some(Bearer { domain: Domain::Admin, token });
        }
        self.user.token().map(|token| Bearer { domain: Domain::User, token })
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        on_unauthorized: OnUnauthorized,
    ) -> Result<ApiResponse, ApiError> {
        let bearer = self.resolve_bearer();
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if let Some(bearer) = &bearer {
            headers.push(("Authorization".to_owned(), format!("Bearer {}", bearer.token)));
        }
        let request = ApiRequest { method, url: self.config.url(path), headers, body };

        let resp = self.transport.send(request).await?;
        if resp.ok() {
            return Ok(resp);
        }
        if resp.status == 401 && on_unauthorized == OnUnauthorized::Expire {
            self.expire_session(bearer.as_ref());
        }
        Err(ApiError::from_status(resp.status, &resp.body))
    }

    /// Response interceptor for 401.
    ///
    /// Clears only the domain whose token was rejected, and only while that
    /// token is still the stored one; a session replaced meanwhile (another
    /// tab logged in again) is left alone and no redirect happens.
    fn expire_session(&self, bearer: Option<&Bearer>) {
        let domain = match bearer {
            Some(Bearer { domain: Domain::Admin, token }) => {
                if self.admin.token().as_deref() != Some(token.as_str()) {
                    leptos::logging::log!("401 for a superseded admin token; session kept");
                    return;
                }
                Domain::Admin
            }
            Some(Bearer { domain: Domain::User, token }) => {
                if self.user.token().as_deref() != Some(token.as_str()) {
                    leptos::logging::log!("401 for a superseded user token; session kept");
                    return;
                }
                Domain::User
            }
            None if self.user.has_active_marker() => Domain::User,
            None => Domain::Admin,
        };
        match domain {
            Domain::Admin => self.admin.logout(),
            Domain::User => self.user.logout(),
        }
        leptos::logging::warn!("session rejected by server; redirecting to {}", domain.login_path());
        self.navigator.hard_redirect(domain.login_path());
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<R: DeserializeOwned>(resp: &ApiResponse) -> Result<R, ApiError> {
    let body = if resp.body.trim().is_empty() { "null" } else { resp.body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
