//! Console operator accounts under `/admin`.
//!
//! Deletion is soft: deleted accounts move to [`deleted`] and can be restored.

#[cfg(test)]
#[path = "admins_test.rs"]
mod admins_test;

use crate::net::error::ApiError;
use crate::net::http::{HttpClient, Transport};
use crate::net::types::{AdminAccount, Ack};

pub fn list_path() -> &'static str {
    "/admin/list"
}

pub fn item_path(id: i64) -> String {
    format!("/admin/{id}")
}

pub fn delete_path(id: i64) -> String {
    format!("/admin/delete/{id}")
}

pub fn restore_path(id: i64) -> String {
    format!("/admin/restore/{id}")
}

pub async fn list<T: Transport>(http: &HttpClient<T>) -> Result<Vec<AdminAccount>, ApiError> {
    http.get(list_path()).await
}

pub async fn get<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<AdminAccount, ApiError> {
    http.get(&item_path(id)).await
}

pub async fn create<T: Transport>(http: &HttpClient<T>, account: &AdminAccount) -> Result<AdminAccount, ApiError> {
    http.post("/admin/create", account).await
}

/// The account id travels in the body.
pub async fn update<T: Transport>(http: &HttpClient<T>, account: &AdminAccount) -> Result<AdminAccount, ApiError> {
    http.put("/admin/update", account).await
}

pub async fn delete<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<(), ApiError> {
    http.delete(&delete_path(id)).await
}

pub async fn restore<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<Ack, ApiError> {
    http.put_empty(&restore_path(id)).await
}

pub async fn deleted<T: Transport>(http: &HttpClient<T>) -> Result<Vec<AdminAccount>, ApiError> {
    http.get("/admin/deleted").await
}
