//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(i64),

    #[error("Testimonial not found: {0}")]
    TestimonialNotFound(i64),

    #[error("News not found: {0}")]
    NewsNotFound(i64),

    #[error("Activity not found: {0}")]
    ActivityNotFound(i64),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Role not found: {0}")]
    RoleNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing role: {0}")]
    MissingRole(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::TestimonialNotFound(_) => "UNKNOWN_TESTIMONIAL",
            Self::NewsNotFound(_) => "UNKNOWN_NEWS",
            Self::ActivityNotFound(_) => "UNKNOWN_ACTIVITY",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::RoleNotFound(_) => "UNKNOWN_ROLE",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",

            // Validation
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            // Authorization
            Self::MissingRole(_) => "MISSING_ROLE",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MemberNotFound(_)
                | Self::TestimonialNotFound(_)
                | Self::NewsNotFound(_)
                | Self::ActivityNotFound(_)
                | Self::UserNotFound(_)
                | Self::RoleNotFound(_)
                | Self::CategoryNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::WeakPassword(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingRole(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }
}
