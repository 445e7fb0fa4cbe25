//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A users row joined with its roles row
///
/// The password hash is deliberately not selected; it is read on its own
/// only when authenticating.
#[derive(Debug, Clone, FromRow)]
pub struct UserWithRoleModel {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub photo: Option<String>,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub role_id: i64,
    pub role_name: String,
    pub role_description: Option<String>,
}
