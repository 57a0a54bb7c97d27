//! Participant self-service calls, authorized by the user token.

#[cfg(test)]
#[path = "participant_test.rs"]
mod participant_test;

use super::with_query;
use crate::net::error::ApiError;
use crate::net::http::{HttpClient, Transport};
use crate::net::types::{UserParticipation, UserSemesters, WeeklyRecord};

pub fn semesters_path(person_id: i64) -> String {
    format!("/user/{person_id}/semesters")
}

/// Filters are only sent when present.
pub fn participations_path(person_id: i64, semester_id: Option<i64>, group_id: Option<i64>) -> String {
    let mut pairs = Vec::new();
    if let Some(id) = semester_id {
        pairs.push(("semesterId", id.to_string()));
    }
    if let Some(id) = group_id {
        pairs.push(("groupId", id.to_string()));
    }
    with_query(&format!("/user/{person_id}/participations"), &pairs)
}

pub fn record_path(participation_id: i64) -> String {
    format!("/user/participations/{participation_id}/record")
}

pub async fn semesters<T: Transport>(http: &HttpClient<T>, person_id: i64) -> Result<UserSemesters, ApiError> {
    http.get(&semesters_path(person_id)).await
}

pub async fn participations<T: Transport>(
    http: &HttpClient<T>,
    person_id: i64,
    semester_id: Option<i64>,
    group_id: Option<i64>,
) -> Result<Vec<UserParticipation>, ApiError> {
    http.get(&participations_path(person_id, semester_id, group_id)).await
}

/// Creates the week's record on first save, updates it afterwards.
pub async fn save_record<T: Transport>(
    http: &HttpClient<T>,
    participation_id: i64,
    record: &WeeklyRecord,
) -> Result<WeeklyRecord, ApiError> {
    http.put(&record_path(participation_id), record).await
}
