//! Testimonial database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for testimonials table
#[derive(Debug, Clone, FromRow)]
pub struct TestimonialModel {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
