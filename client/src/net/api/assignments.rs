//! Per-participant book assignments (`/admin/semester-user-books`).

#[cfg(test)]
#[path = "assignments_test.rs"]
mod assignments_test;

use super::with_query;
use crate::net::error::ApiError;
use crate::net::http::{HttpClient, Transport};
use crate::net::types::SemesterUserBook;

const BASE: &str = "/admin/semester-user-books";

/// Which assignments to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    All,
    Semester(i64),
    Person(i64),
    Book(i64),
    SemesterPerson { semester_id: i64, person_id: i64 },
    SemesterBook { semester_id: i64, book_id: i64 },
}

pub fn item_path(id: i64) -> String {
    format!("{BASE}/{id}")
}

pub fn lookup_path(lookup: Lookup) -> String {
    match lookup {
        Lookup::All => BASE.to_owned(),
        Lookup::Semester(id) => format!("{BASE}/semester/{id}"),
        Lookup::Person(id) => format!("{BASE}/person/{id}"),
        Lookup::Book(id) => format!("{BASE}/book/{id}"),
        Lookup::SemesterPerson { semester_id, person_id } => {
            format!("{BASE}/semester/{semester_id}/person/{person_id}")
        }
        Lookup::SemesterBook { semester_id, book_id } => format!("{BASE}/semester/{semester_id}/book/{book_id}"),
    }
}

pub fn create_path(semester_id: i64, person_id: i64, book_id: i64) -> String {
    with_query(
        BASE,
        &[
            ("semesterId", semester_id.to_string()),
            ("personId", person_id.to_string()),
            ("bookId", book_id.to_string()),
        ],
    )
}

pub async fn find<T: Transport>(http: &HttpClient<T>, lookup: Lookup) -> Result<Vec<SemesterUserBook>, ApiError> {
    http.get(&lookup_path(lookup)).await
}

pub async fn get<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<SemesterUserBook, ApiError> {
    http.get(&item_path(id)).await
}

pub async fn create<T: Transport>(
    http: &HttpClient<T>,
    semester_id: i64,
    person_id: i64,
    book_id: i64,
    assignment: &SemesterUserBook,
) -> Result<SemesterUserBook, ApiError> {
    http.post(&create_path(semester_id, person_id, book_id), assignment).await
}

pub async fn update<T: Transport>(
    http: &HttpClient<T>,
    id: i64,
    assignment: &SemesterUserBook,
) -> Result<SemesterUserBook, ApiError> {
    http.put(&item_path(id), assignment).await
}

pub async fn delete<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<(), ApiError> {
    http.delete(&item_path(id)).await
}
