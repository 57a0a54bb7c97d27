//! In-memory doubles for exercising the session stack without a browser.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::error::ApiError;
use super::http::{ApiRequest, ApiResponse, Transport};
use crate::config::ApiConfig;
use crate::session::Session;
use crate::session::storage::{MemoryStorage, StorageBackend, StorageError};
use crate::util::navigate::Navigator;

/// Scripted transport: replies in order, records every request.
///
/// With nothing scripted it answers `200 null`.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    replies: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub(crate) fn reply(&self, status: u16, body: serde_json::Value) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
    }

    pub(crate) fn fail(&self, error: ApiError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse { status: 200, body: "null".to_owned() }))
    }
}

/// Navigator that remembers where it was sent.
#[derive(Clone, Default)]
pub(crate) struct RecordingNavigator {
    visits: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub(crate) fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn hard_redirect(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_owned());
    }
}

/// Shared in-memory store that refuses writes to the listed keys, like a
/// full quota would.
#[derive(Clone)]
pub(crate) struct RejectingStorage {
    inner: MemoryStorage,
    rejected: Vec<&'static str>,
}

impl RejectingStorage {
    pub(crate) fn new(inner: MemoryStorage, rejected: &[&'static str]) -> Self {
        Self { inner, rejected: rejected.to_vec() }
    }
}

impl StorageBackend for RejectingStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.rejected.contains(&key) {
            return Err(StorageError::Rejected("quota".to_owned()));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        self.inner.remove_item(key);
    }
}

/// One browser tab wired to in-memory doubles.
pub(crate) struct TestTab {
    pub session: Session<MockTransport>,
    pub transport: MockTransport,
    pub navigator: RecordingNavigator,
    pub storage: MemoryStorage,
}

impl TestTab {
    pub(crate) fn new() -> Self {
        Self::on_origin(MemoryStorage::new())
    }

    /// A tab sharing `storage` with other tabs of the same origin.
    pub(crate) fn on_origin(storage: MemoryStorage) -> Self {
        Self::with_backend(storage.clone(), Arc::new(storage))
    }

    /// A tab whose session writes through `backend`; `storage` is what the
    /// test inspects afterwards.
    pub(crate) fn with_backend(storage: MemoryStorage, backend: Arc<dyn StorageBackend>) -> Self {
        let transport = MockTransport::default();
        let navigator = RecordingNavigator::default();
        let session = Session::new(
            backend,
            Arc::new(navigator.clone()),
            ApiConfig::default(),
            transport.clone(),
        );
        Self { session, transport, navigator, storage }
    }
}

pub(crate) fn block_on<F: std::future::Future>(future: F) -> F::Output {
    futures::executor::block_on(future)
}
