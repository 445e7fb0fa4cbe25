//! User entity - an account that can authenticate against the API

use chrono::{DateTime, Utc};

use super::Role;

/// User entity
///
/// The email is the principal name carried in access tokens. Users are soft
/// deleted like members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub photo: Option<String>,
    pub role: Role,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, not yet persisted User
    pub fn new(first_name: String, last_name: String, email: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            first_name,
            last_name,
            email,
            photo: None,
            role,
            deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Get the display name: "first last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check if the user holds the administrator role
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Canonical form of an account email: trimmed and lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
