//! Weekly records under `/admin/records`.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use super::with_query;
use crate::net::error::ApiError;
use crate::net::http::{HttpClient, Transport};
use crate::net::types::WeeklyRecord;

const BASE: &str = "/admin/records";

pub fn item_path(id: i64) -> String {
    format!("{BASE}/{id}")
}

pub fn by_person_path(person_id: i64) -> String {
    format!("{BASE}/person/{person_id}")
}

pub fn by_semester_path(semester_id: i64) -> String {
    format!("{BASE}/semester/{semester_id}")
}

pub fn by_person_and_semester_path(person_id: i64, semester_id: i64) -> String {
    format!("{BASE}/person/{person_id}/semester/{semester_id}")
}

pub fn create_path(participation_id: i64) -> String {
    with_query(BASE, &[("participationId", participation_id.to_string())])
}

pub async fn list<T: Transport>(http: &HttpClient<T>) -> Result<Vec<WeeklyRecord>, ApiError> {
    http.get(BASE).await
}

pub async fn get<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<WeeklyRecord, ApiError> {
    http.get(&item_path(id)).await
}

pub async fn by_person<T: Transport>(http: &HttpClient<T>, person_id: i64) -> Result<Vec<WeeklyRecord>, ApiError> {
    http.get(&by_person_path(person_id)).await
}

pub async fn by_semester<T: Transport>(http: &HttpClient<T>, semester_id: i64) -> Result<Vec<WeeklyRecord>, ApiError> {
    http.get(&by_semester_path(semester_id)).await
}

pub async fn by_person_and_semester<T: Transport>(
    http: &HttpClient<T>,
    person_id: i64,
    semester_id: i64,
) -> Result<Vec<WeeklyRecord>, ApiError> {
    http.get(&by_person_and_semester_path(person_id, semester_id)).await
}

pub async fn create<T: Transport>(
    http: &HttpClient<T>,
    participation_id: i64,
    record: &WeeklyRecord,
) -> Result<WeeklyRecord, ApiError> {
    http.post(&create_path(participation_id), record).await
}

pub async fn update<T: Transport>(http: &HttpClient<T>, id: i64, record: &WeeklyRecord) -> Result<WeeklyRecord, ApiError> {
    http.put(&item_path(id), record).await
}

/// Superadmin only; the service rejects anyone else.
pub async fn delete<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<(), ApiError> {
    http.delete(&item_path(id)).await
}
