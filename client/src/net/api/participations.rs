//! Enrollment of persons in semester groups.
//!
//! Listings are paged; the service defaults to newest first.

#[cfg(test)]
#[path = "participations_test.rs"]
mod participations_test;

use super::with_query;
use crate::net::error::ApiError;
use crate::net::http::{HttpClient, Transport};
use crate::net::types::{Page, PageRequest, Participation, ParticipationFilter};

const BASE: &str = "/admin/participations";

/// Scope of a paged participation listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    All,
    Semester(i64),
    Group(i64),
    Person(i64),
}

pub fn item_path(id: i64) -> String {
    format!("{BASE}/{id}")
}

pub fn list_path(scope: Scope, page: &PageRequest) -> String {
    let path = match scope {
        Scope::All => BASE.to_owned(),
        Scope::Semester(id) => format!("{BASE}/semester/{id}"),
        Scope::Group(id) => format!("{BASE}/group/{id}"),
        Scope::Person(id) => format!("{BASE}/person/{id}"),
    };
    with_query(&path, &page.query_pairs())
}

pub fn search_path(filter: &ParticipationFilter, page: &PageRequest) -> String {
    let mut pairs = filter.query_pairs();
    pairs.extend(page.query_pairs());
    with_query(&format!("{BASE}/search"), &pairs)
}

pub fn create_path(semester_id: i64, group_id: i64, person_id: i64) -> String {
    with_query(
        BASE,
        &[
            ("semesterId", semester_id.to_string()),
            ("groupId", group_id.to_string()),
            ("personId", person_id.to_string()),
        ],
    )
}

pub async fn list<T: Transport>(
    http: &HttpClient<T>,
    scope: Scope,
    page: &PageRequest,
) -> Result<Page<Participation>, ApiError> {
    http.get(&list_path(scope, page)).await
}

pub async fn search<T: Transport>(
    http: &HttpClient<T>,
    filter: &ParticipationFilter,
    page: &PageRequest,
) -> Result<Page<Participation>, ApiError> {
    http.get(&search_path(filter, page)).await
}

pub async fn get<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<Participation, ApiError> {
    http.get(&item_path(id)).await
}

pub async fn create<T: Transport>(
    http: &HttpClient<T>,
    semester_id: i64,
    group_id: i64,
    person_id: i64,
    participation: &Participation,
) -> Result<Participation, ApiError> {
    http.post(&create_path(semester_id, group_id, person_id), participation).await
}

pub async fn update<T: Transport>(
    http: &HttpClient<T>,
    id: i64,
    participation: &Participation,
) -> Result<Participation, ApiError> {
    http.put(&item_path(id), participation).await
}

pub async fn delete<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<(), ApiError> {
    http.delete(&item_path(id)).await
}
