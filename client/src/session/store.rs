//! Typed per-domain credential persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each domain owns exactly one JSON record, written with a single
//! `set_item`, so a credential is either fully present or absent. The
//! participant domain additionally owns a discriminator key; the user
//! service writes it after the record and removes it before the record.
//!
//! ERROR HANDLING
//! ==============
//! Reads fail safe: a missing store or malformed JSON reads as "no
//! credential". Writes surface [`StorageError`] so login can refuse to report
//! success for a session that was never persisted.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::credential::{AdminCredential, Domain, SessionKind, UserCredential};
use super::storage::{LocalStorage, StorageBackend, StorageError};

pub const ADMIN_KEY: &str = "reading_console_admin";
pub const USER_KEY: &str = "reading_console_user";
pub const SESSION_KIND_KEY: &str = "reading_console_session_kind";

/// Credential store shared by the auth services and the HTTP client.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn StorageBackend>,
}

impl TokenStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(LocalStorage))
    }

    /// Whether a storage key (from a cross-tab change notification) is ours.
    pub fn is_session_key(key: &str) -> bool {
        matches!(key, ADMIN_KEY | USER_KEY | SESSION_KIND_KEY)
    }

    pub fn admin(&self) -> Option<AdminCredential> {
        self.read_record(ADMIN_KEY)
    }

    /// # Errors
    ///
    /// Returns the backend's [`StorageError`] when the record cannot be written.
    pub fn set_admin(&self, credential: &AdminCredential) -> Result<(), StorageError> {
        self.write_record(ADMIN_KEY, credential)
    }

    pub fn user(&self) -> Option<UserCredential> {
        self.read_record(USER_KEY)
    }

    /// # Errors
    ///
    /// Returns the backend's [`StorageError`] when the record cannot be written.
    pub fn set_user(&self, credential: &UserCredential) -> Result<(), StorageError> {
        self.write_record(USER_KEY, credential)
    }

    /// Remove one domain's record. The discriminator is left alone.
    pub fn clear(&self, domain: Domain) {
        match domain {
            Domain::Admin => self.backend.remove_item(ADMIN_KEY),
            Domain::User => self.backend.remove_item(USER_KEY),
        }
    }

    pub fn session_kind(&self) -> Option<SessionKind> {
        self.backend
            .get_item(SESSION_KIND_KEY)
            .as_deref()
            .and_then(SessionKind::parse)
    }

    /// # Errors
    ///
    /// Returns the backend's [`StorageError`] when the marker cannot be written.
    pub fn set_session_kind(&self, kind: SessionKind) -> Result<(), StorageError> {
        self.backend.set_item(SESSION_KIND_KEY, kind.as_str())
    }

    pub fn clear_session_kind(&self) {
        self.backend.remove_item(SESSION_KIND_KEY);
    }

    fn read_record<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get_item(key)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                leptos::logging::warn!("ignoring malformed session record {key}: {e}");
                None
            }
        }
    }

    fn write_record<T: Serialize>(&self, key: &str, record: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record).map_err(|e| StorageError::Rejected(e.to_string()))?;
        self.backend.set_item(key, &raw)
    }
}
