//! # ngo-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    ActivityService, AuthService, MemberService, NewsService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, TestimonialService, UserService,
};
