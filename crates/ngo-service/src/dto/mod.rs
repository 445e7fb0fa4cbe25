//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    ActivityRequest, LoginRequest, MemberRequest, NewsRequest, RegisterRequest,
    TestimonialRequest,
};
pub use responses::{
    ActivityResponse, HealthChecks, HealthResponse, MemberResponse, MessageResponse,
    NewsResponse, PageResponse, ReadinessResponse, RegisterResponse, TestimonialResponse,
    TokenResponse, UserResponse,
};
