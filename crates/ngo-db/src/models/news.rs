//! News database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for news table
#[derive(Debug, Clone, FromRow)]
pub struct NewsModel {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub image: String,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
