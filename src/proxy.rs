//! `/api` forwarding to the REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle calls same-origin `/api/...`; this handler replays the
//! request against `API_UPSTREAM_URL` and relays status, content type and
//! body unchanged. Only `Authorization`, `Content-Type` and `Accept` are
//! forwarded.
//!
//! ERROR HANDLING
//! ==============
//! An unreachable upstream becomes `502` with a JSON `{ "error": ... }` body,
//! which the client maps to an inline error like any other failure.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Clone)]
pub struct ApiProxy {
    client: reqwest::Client,
    upstream: String,
}

impl ApiProxy {
    pub fn new(upstream: String) -> Self {
        Self { client: reqwest::Client::new(), upstream }
    }
}

/// Upstream URL for an inbound `/api/...` request, query preserved.
pub fn target_url(upstream: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", upstream.trim_end_matches('/'))
}

/// Headers copied onto the upstream request.
pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            out.insert(name, value.clone());
        }
    }
    out
}

pub async fn forward(
    State(proxy): State<ApiProxy>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = target_url(&proxy.upstream, &uri);
    let result = proxy
        .client
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await;

    let upstream = match result {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "api upstream unreachable");
            return bad_gateway();
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "api upstream body read failed");
            return bad_gateway();
        }
    };
    tracing::debug!(%method, %url, status = status.as_u16(), "api forwarded");

    let mut response = (status, bytes).into_response();
    if let Some(value) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    response
}

fn bad_gateway() -> Response {
    (
        StatusCode::BAD_GATEWAY,
        axum::Json(serde_json::json!({ "success": false, "error": "API service unavailable" })),
    )
        .into_response()
}
