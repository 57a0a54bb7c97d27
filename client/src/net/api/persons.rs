//! Participants under `/admin/persons`.

#[cfg(test)]
#[path = "persons_test.rs"]
mod persons_test;

use crate::net::error::ApiError;
use crate::net::http::{HttpClient, Transport};
use crate::net::types::Person;

const BASE: &str = "/admin/persons";

pub fn item_path(id: i64) -> String {
    format!("{BASE}/{id}")
}

pub async fn list<T: Transport>(http: &HttpClient<T>) -> Result<Vec<Person>, ApiError> {
    http.get(BASE).await
}

pub async fn get<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<Person, ApiError> {
    http.get(&item_path(id)).await
}

pub async fn create<T: Transport>(http: &HttpClient<T>, person: &Person) -> Result<Person, ApiError> {
    http.post(BASE, person).await
}

pub async fn update<T: Transport>(http: &HttpClient<T>, id: i64, person: &Person) -> Result<Person, ApiError> {
    http.put(&item_path(id), person).await
}

pub async fn delete<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<(), ApiError> {
    http.delete(&item_path(id)).await
}
