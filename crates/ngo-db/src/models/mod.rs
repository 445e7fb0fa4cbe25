//! Database models - SQLx-compatible structs for PostgreSQL tables

mod activity;
mod member;
mod news;
mod role;
mod testimonial;
mod user;

pub use activity::ActivityModel;
pub use member::MemberModel;
pub use news::NewsModel;
pub use role::RoleModel;
pub use testimonial::TestimonialModel;
pub use user::UserWithRoleModel;
