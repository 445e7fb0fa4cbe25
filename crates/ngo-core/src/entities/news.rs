//! News entity

use chrono::{DateTime, Utc};

/// News article, filed under a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct News {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub image: String,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl News {
    /// Create a new, not yet persisted News article
    pub fn new(name: String, content: String, image: String, category_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            content,
            image,
            category_id,
            created_at: now,
            updated_at: now,
        }
    }
}
