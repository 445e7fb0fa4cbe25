//! Testimonial entity - what people say about the organization

use chrono::{DateTime, Utc};

/// Testimonial entity (hard deleted)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Testimonial {
    /// Create a new, not yet persisted Testimonial
    pub fn new(name: String, image: String, content: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            image,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields
    pub fn apply(&mut self, name: String, image: String, content: Option<String>) {
        self.name = name;
        self.image = image;
        self.content = content;
        self.updated_at = Utc::now();
    }
}
