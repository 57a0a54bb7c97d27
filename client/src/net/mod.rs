//! Networking for the console's REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the single egress point (bearer attachment, 401 handling),
//! `api` is the typed endpoint catalogue built on it, `types` holds the wire
//! DTOs, and `error` the failure taxonomy shared by all of them.

pub mod api;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
