//! Activity entity - a program or event run by the organization

use chrono::{DateTime, Utc};

/// Activity entity. Activities are never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    /// Create a new, not yet persisted Activity
    pub fn new(name: String, content: String, image: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            content,
            image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields
    pub fn apply(&mut self, name: String, content: String, image: String) {
        self.name = name;
        self.content = content;
        self.image = image;
        self.updated_at = Utc::now();
    }
}
