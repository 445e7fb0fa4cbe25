//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` for one request and
//! orchestrates repository calls plus entity/DTO mapping.

pub mod activity;
pub mod auth;
pub mod context;
pub mod error;
pub mod member;
pub mod news;
pub mod testimonial;
pub mod user;

// Re-export all services for convenience
pub use activity::ActivityService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use member::MemberService;
pub use news::NewsService;
pub use testimonial::TestimonialService;
pub use user::UserService;
