//! Wire DTOs for the reading-group REST service.
//!
//! DESIGN
//! ======
//! Field names follow the service's camelCase JSON. Dates stay as the ISO
//! `YYYY-MM-DD` strings the service emits; the console only displays them.
//! Entity ids are `Option` so one struct serves as both the read model and
//! the create/update body (`None` is omitted on the wire).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::session::credential::AdminRole;

/// Console operator account as listed by `/admin/list`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub name: String,
    /// Only sent on create or password change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "type", default)]
    pub role: AdminRole,
    #[serde(default, alias = "is_delete", skip_serializing)]
    pub is_delete: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub group_id: Option<i64>,
    pub group_name: String,
}

/// A participant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub person_id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub semester_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub sdate: Option<String>,
    #[serde(default)]
    pub edate: Option<String>,
    #[serde(default)]
    pub is_break: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub book_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One week of a participant's reading and devotion log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub record_id: Option<i64>,
    #[serde(default)]
    pub week_number: Option<i32>,
    #[serde(default)]
    pub service1: Option<String>,
    #[serde(default)]
    pub service2: Option<String>,
    #[serde(default, deserialize_with = "bool_or_null")]
    pub summary1: bool,
    #[serde(default, deserialize_with = "bool_or_null")]
    pub summary2: bool,
    #[serde(default)]
    pub qt: Option<i32>,
    #[serde(default)]
    pub reading: Option<i32>,
    #[serde(default)]
    pub pray: Option<i32>,
    #[serde(default)]
    pub memorize: Option<i32>,
    #[serde(default)]
    pub submitted_date: Option<String>,
}

/// Person's enrollment in a group for a semester.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub participation_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<Semester>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub participation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_record: Option<WeeklyRecord>,
}

/// Book assigned to a participant for a semester.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterUserBook {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<Semester>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Spring-style page envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.number.saturating_add(1) >= self.total_pages
    }
}

/// `page`, `size` and optional `sort` query parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Option<String>,
}

impl PageRequest {
    pub const DEFAULT_SIZE: u32 = 20;

    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size, sort: None }
    }

    /// Newest participation first, the service's usual listing order.
    pub fn newest_first(page: u32) -> Self {
        Self::new(page, Self::DEFAULT_SIZE).sorted("participationDate,desc")
    }

    #[must_use]
    pub fn sorted(mut self, sort: &str) -> Self {
        self.sort = Some(sort.to_owned());
        self
    }

    /// Query pairs in the order the service documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}

/// Optional filters for `/admin/participations/search`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParticipationFilter {
    pub semester_id: Option<i64>,
    pub group_id: Option<i64>,
    pub person_id: Option<i64>,
    pub status: Option<String>,
}

impl ParticipationFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.semester_id {
            pairs.push(("semesterId", id.to_string()));
        }
        if let Some(id) = self.group_id {
            pairs.push(("groupId", id.to_string()));
        }
        if let Some(id) = self.person_id {
            pairs.push(("personId", id.to_string()));
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("status", status.to_owned()));
        }
        pairs
    }
}

// =============================================================
// Participant self-service
// =============================================================

/// `GET /user/{personId}/semesters`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSemesters {
    #[serde(deserialize_with = "integer_id")]
    pub person_id: i64,
    #[serde(default)]
    pub person_name: String,
    #[serde(default)]
    pub semesters: Vec<UserSemester>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSemester {
    #[serde(deserialize_with = "integer_id")]
    pub semester_id: i64,
    pub semester_name: String,
    #[serde(default)]
    pub sdate: Option<String>,
    #[serde(default)]
    pub edate: Option<String>,
    #[serde(default)]
    pub groups: Vec<UserGroup>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroup {
    #[serde(deserialize_with = "integer_id")]
    pub group_id: i64,
    pub group_name: String,
    #[serde(default)]
    pub participation_date: Option<String>,
}

/// Flattened row of `GET /user/{personId}/participations`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserParticipation {
    #[serde(deserialize_with = "integer_id")]
    pub participation_id: i64,
    #[serde(deserialize_with = "integer_id")]
    pub semester_id: i64,
    #[serde(default)]
    pub semester_name: String,
    #[serde(deserialize_with = "integer_id")]
    pub group_id: i64,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub participation_date: Option<String>,
    #[serde(default)]
    pub weekly_record: Option<WeeklyRecord>,
}

/// `{ success, message }` acknowledgement returned by delete/restore calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    id_from_value(value).map(Some).map_err(D::Error::custom)
}

fn integer_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(value).map_err(D::Error::custom)
}

fn bool_or_null<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Ids arrive as JSON integers, integral floats, or numeric strings.
fn id_from_value(value: serde_json::Value) -> Result<i64, String> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err("expected integer-compatible number".to_owned())
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("expected numeric id, got {raw:?}")),
        _ => Err("expected number".to_owned()),
    }
}
