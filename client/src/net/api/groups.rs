//! Reading groups and their members.

#[cfg(test)]
#[path = "groups_test.rs"]
mod groups_test;

use super::{segment, with_query};
use crate::net::error::ApiError;
use crate::net::http::{HttpClient, Transport};
use crate::net::types::{Group, Person};

const BASE: &str = "/admin/groups";

pub fn item_path(id: i64) -> String {
    format!("{BASE}/{id}")
}

pub fn by_name_path(name: &str) -> String {
    format!("{BASE}/name/{}", segment(name))
}

pub fn members_path(group_id: i64) -> String {
    format!("{BASE}/{group_id}/persons")
}

pub fn add_member_path(group_id: i64, person_id: i64) -> String {
    with_query(&members_path(group_id), &[("personId", person_id.to_string())])
}

pub fn member_path(group_id: i64, person_id: i64) -> String {
    format!("{BASE}/{group_id}/persons/{person_id}")
}

pub async fn list<T: Transport>(http: &HttpClient<T>) -> Result<Vec<Group>, ApiError> {
    http.get(BASE).await
}

pub async fn get<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<Group, ApiError> {
    http.get(&item_path(id)).await
}

pub async fn find_by_name<T: Transport>(http: &HttpClient<T>, name: &str) -> Result<Group, ApiError> {
    http.get(&by_name_path(name)).await
}

pub async fn create<T: Transport>(http: &HttpClient<T>, group: &Group) -> Result<Group, ApiError> {
    http.post(BASE, group).await
}

pub async fn update<T: Transport>(http: &HttpClient<T>, id: i64, group: &Group) -> Result<Group, ApiError> {
    http.put(&item_path(id), group).await
}

pub async fn delete<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<(), ApiError> {
    http.delete(&item_path(id)).await
}

pub async fn members<T: Transport>(http: &HttpClient<T>, group_id: i64) -> Result<Vec<Person>, ApiError> {
    http.get(&members_path(group_id)).await
}

pub async fn add_member<T: Transport>(http: &HttpClient<T>, group_id: i64, person_id: i64) -> Result<Group, ApiError> {
    http.post_empty(&add_member_path(group_id, person_id)).await
}

pub async fn remove_member<T: Transport>(http: &HttpClient<T>, group_id: i64, person_id: i64) -> Result<(), ApiError> {
    http.delete(&member_path(group_id, person_id)).await
}
