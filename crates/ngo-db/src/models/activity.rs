//! Activity database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for activities table
#[derive(Debug, Clone, FromRow)]
pub struct ActivityModel {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
