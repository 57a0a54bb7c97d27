//! Semesters and the groups and books scheduled in them.

#[cfg(test)]
#[path = "semesters_test.rs"]
mod semesters_test;

use super::with_query;
use crate::net::error::ApiError;
use crate::net::http::{HttpClient, Transport};
use crate::net::types::{Book, Group, Semester};

const BASE: &str = "/admin/semesters";

pub fn item_path(id: i64) -> String {
    format!("{BASE}/{id}")
}

pub fn groups_path(semester_id: i64) -> String {
    format!("{BASE}/{semester_id}/groups")
}

pub fn add_group_path(semester_id: i64, group_id: i64) -> String {
    with_query(&groups_path(semester_id), &[("groupId", group_id.to_string())])
}

pub fn group_path(semester_id: i64, group_id: i64) -> String {
    format!("{BASE}/{semester_id}/groups/{group_id}")
}

pub fn books_path(semester_id: i64) -> String {
    format!("{BASE}/{semester_id}/books")
}

pub fn add_book_path(semester_id: i64, book_id: i64) -> String {
    with_query(&books_path(semester_id), &[("bookId", book_id.to_string())])
}

pub fn book_path(semester_id: i64, book_id: i64) -> String {
    format!("{BASE}/{semester_id}/books/{book_id}")
}

pub async fn list<T: Transport>(http: &HttpClient<T>) -> Result<Vec<Semester>, ApiError> {
    http.get(BASE).await
}

pub async fn get<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<Semester, ApiError> {
    http.get(&item_path(id)).await
}

pub async fn create<T: Transport>(http: &HttpClient<T>, semester: &Semester) -> Result<Semester, ApiError> {
    http.post(BASE, semester).await
}

pub async fn update<T: Transport>(http: &HttpClient<T>, id: i64, semester: &Semester) -> Result<Semester, ApiError> {
    http.put(&item_path(id), semester).await
}

pub async fn delete<T: Transport>(http: &HttpClient<T>, id: i64) -> Result<(), ApiError> {
    http.delete(&item_path(id)).await
}

pub async fn groups<T: Transport>(http: &HttpClient<T>, semester_id: i64) -> Result<Vec<Group>, ApiError> {
    http.get(&groups_path(semester_id)).await
}

pub async fn add_group<T: Transport>(http: &HttpClient<T>, semester_id: i64, group_id: i64) -> Result<Semester, ApiError> {
    http.post_empty(&add_group_path(semester_id, group_id)).await
}

pub async fn remove_group<T: Transport>(http: &HttpClient<T>, semester_id: i64, group_id: i64) -> Result<(), ApiError> {
    http.delete(&group_path(semester_id, group_id)).await
}

pub async fn books<T: Transport>(http: &HttpClient<T>, semester_id: i64) -> Result<Vec<Book>, ApiError> {
    http.get(&books_path(semester_id)).await
}

pub async fn add_book<T: Transport>(http: &HttpClient<T>, semester_id: i64, book_id: i64) -> Result<Semester, ApiError> {
    http.post_empty(&add_book_path(semester_id, book_id)).await
}

pub async fn remove_book<T: Transport>(http: &HttpClient<T>, semester_id: i64, book_id: i64) -> Result<(), ApiError> {
    http.delete(&book_path(semester_id, book_id)).await
}
