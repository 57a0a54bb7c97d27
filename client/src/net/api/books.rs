//! Book catalogue under `/admin/books`.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use super::with_query;
use crate::net::error::ApiError;
use crate::net::http::{HttpClient, Transport};
use crate::net::types::Book;

const BASE: &str = "/admin/books";

/// Which column a catalogue search matches against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
        }
    }
}

pub fn item_path(id: i64) -> String {
    format!("{BASE}/{id}")
}

pub fn search_path(field: SearchField, keyword: &str) -> String {
    with_query(
        &format!("{BASE}/search/{}", field.as_str()),
        &[("keyword", keyword.trim().to_owned())],
    )
}

pub async fn list<T: Transport>(http: &HttpClient<T>) -> Result<Vec<Book>, ApiError> {
    http.get(BASE).await
}

pub async fn get<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<Book, ApiError> {
    http.get(&item_path(id)).await
}

pub async fn search<T: Transport>(http: &HttpClient<T>, field: SearchField, keyword: &str) -> Result<Vec<Book>, ApiError> {
    http.get(&search_path(field, keyword)).await
}

pub async fn create<T: Transport>(http: &HttpClient<T>, book: &Book) -> Result<Book, ApiError> {
    http.post(BASE, book).await
}

pub async fn update<T: Transport>(http: &HttpClient<T>, id: i64, book: &Book) -> Result<Book, ApiError> {
    http.put(&item_path(id), book).await
}

pub async fn delete<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<(), ApiError> {
    http.delete(&item_path(id)).await
}
