//! Persisted credential records for the two auth domains.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use serde::{Deserialize, Serialize};

/// Admin privilege level, serialized as the lowercase wire names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Superadmin,
    Admin,
    Moderator,
    /// Read-only. A missing or unrecognised role maps here.
    #[default]
    #[serde(other)]
    Viewer,
}

impl AdminRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::Viewer => "viewer",
        }
    }

    /// Only superadmins may delete participation records.
    pub fn can_delete_records(self) -> bool {
        matches!(self, Self::Superadmin)
    }

    pub fn can_manage_admins(self) -> bool {
        matches!(self, Self::Superadmin | Self::Admin)
    }

    pub fn can_edit(self) -> bool {
        !matches!(self, Self::Viewer)
    }
}

/// Signed-in admin, stored as one JSON record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredential {
    pub token: String,
    #[serde(alias = "adminId")]
    pub id: i64,
    pub username: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub role: AdminRole,
}

/// Signed-in participant, stored as one JSON record.
///
/// `id` is the person id used in `/user/{id}/...` paths.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredential {
    pub token: String,
    pub id: i64,
    pub name: String,
}

/// Which auth domain a credential belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
    Admin,
    User,
}

impl Domain {
    /// Login screen a session in this domain falls back to.
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Admin => crate::routes::ADMIN_LOGIN,
            Self::User => crate::routes::USER_LOGIN,
        }
    }
}

/// Persisted marker saying the participant session is the active one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionKind {
    User,
}

impl SessionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Self::User),
            _ => None,
        }
    }
}
