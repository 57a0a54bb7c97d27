//! Client route paths shared by the router, guards and the 401 handler.

pub const ADMIN_LOGIN: &str = "/login";
pub const USER_LOGIN: &str = "/user/login";
pub const DASHBOARD: &str = "/dashboard";
pub const USER_PROFILE: &str = "/user/profile";

/// Participant view of one semester/group pairing.
pub fn user_participations(semester_id: i64, group_id: i64) -> String {
    format!("/user/semester/{semester_id}/group/{group_id}/participations")
}
