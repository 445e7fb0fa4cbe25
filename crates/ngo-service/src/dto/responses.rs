//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use ngo_core::Page;

// ============================================================================
// Common Response Types
// ============================================================================

/// A localized confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One page of a listing, with links to the neighbouring pages
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub total_elements: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}

impl<T> PageResponse<T> {
    /// Build from a repository page; links are `<base_path>?page=N`
    pub fn from_page(page: Page<T>, base_path: &str) -> Self {
        let number = page.request.page;
        let link = |n: u32| format!("{base_path}?page={n}");

        Self {
            previous_page: page.has_previous().then(|| link(number - 1)),
            next_page: page.has_next().then(|| link(number + 1)),
            page: number,
            total_elements: page.total,
            content: page.items,
        }
    }
}

// ============================================================================
// Entity Responses
// ============================================================================

/// Testimonial
#[derive(Debug, Clone, Serialize)]
pub struct TestimonialResponse {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Member
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub image: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// News
#[derive(Debug, Clone, Serialize)]
pub struct NewsResponse {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub image: String,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Activity
#[derive(Debug, Clone, Serialize)]
pub struct ActivityResponse {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// User / Auth Responses
// ============================================================================

/// User profile
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub photo: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Registration result, including a token so the client is signed in
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub photo: Option<String>,
    pub token: String,
}

/// Login result
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status per dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
