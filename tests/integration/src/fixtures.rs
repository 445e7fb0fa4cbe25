//! Test fixtures and data generators
//!
//! Wire-level request and response shapes, independent of the server's own
//! DTO types.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub photo: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123".to_string(),
            photo: None,
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self::new(&reg.email, &reg.password)
    }
}

/// Registration response
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub photo: Option<String>,
    pub token: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// User profile
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub photo: Option<String>,
    pub role: String,
}

/// `{ "message": ... }` body
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Testimonial create/update request
#[derive(Debug, Serialize)]
pub struct TestimonialRequest {
    pub name: String,
    pub image: String,
    pub content: Option<String>,
}

impl TestimonialRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            image: "http://img.example.com/t.png".to_string(),
            content: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TestimonialResponse {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub content: Option<String>,
}

/// Member create/update request
#[derive(Debug, Serialize)]
pub struct MemberRequest {
    pub name: String,
    pub image: String,
    pub facebook_url: Option<String>,
    pub description: Option<String>,
}

impl MemberRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            image: "http://img.example.com/m.png".to_string(),
            facebook_url: None,
            description: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub facebook_url: Option<String>,
    pub description: Option<String>,
}

/// News create request
#[derive(Debug, Serialize)]
pub struct NewsRequest {
    pub name: String,
    pub content: String,
    pub image: String,
    pub category_id: i64,
}

/// Activity create/update request
#[derive(Debug, Serialize)]
pub struct ActivityRequest {
    pub name: String,
    pub content: String,
    pub image: String,
}

impl ActivityRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            content: "Weekend workshop".to_string(),
            image: "http://img.example.com/a.png".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ActivityResponse {
    pub id: i64,
    pub name: String,
    pub content: String,
}

/// One page of a listing
#[derive(Debug, Deserialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub total_elements: i64,
    pub previous_page: Option<String>,
    pub next_page: Option<String>,
}
