//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Reject names containing digits
fn validate_no_digits(name: &str) -> Result<(), ValidationError> {
    if name.chars().any(|c| c.is_ascii_digit()) {
        let mut err = ValidationError::new("no_digits");
        err.message = Some("Name must not contain digits".into());
        return Err(err);
    }
    Ok(())
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(url(message = "Photo must be a valid URL"))]
    pub photo: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Entity Requests
// ============================================================================

/// Create or replace a testimonial
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TestimonialRequest {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "validate_no_digits")
    )]
    pub name: String,

    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,

    pub content: Option<String>,
}

/// Create or replace a member
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MemberRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(url(message = "Facebook URL must be a valid URL"))]
    pub facebook_url: Option<String>,

    #[validate(url(message = "Instagram URL must be a valid URL"))]
    pub instagram_url: Option<String>,

    #[validate(url(message = "LinkedIn URL must be a valid URL"))]
    pub linkedin_url: Option<String>,

    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,

    pub description: Option<String>,
}

/// Create news
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewsRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,

    #[validate(range(min = 1, message = "Category id must be positive"))]
    pub category_id: i64,
}

/// Create or replace an activity
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ActivityRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,
}
