//! Typed endpoint catalogue over [`HttpClient`](super::http::HttpClient).
//!
//! SYSTEM CONTEXT
//! ==============
//! One submodule per resource. Each pairs pure path builders (unit tested
//! without a transport) with thin async calls, so screens never assemble
//! URLs or touch headers themselves.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns [`ApiError`](super::error::ApiError) untouched; a 401 has
//! already been handled by the client by the time the caller sees it.

#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

pub mod admins;
pub mod assignments;
pub mod books;
pub mod groups;
pub mod participant;
pub mod participations;
pub mod persons;
pub mod records;
pub mod semesters;

/// Append percent-encoded query pairs to `path`.
pub(crate) fn with_query<K: AsRef<str>>(path: &str, pairs: &[(K, String)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key.as_ref(), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// Percent-encode a free-text path segment (group names, search kinds).
pub(crate) fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
