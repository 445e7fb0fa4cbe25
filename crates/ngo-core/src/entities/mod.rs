//! Domain entities - core business objects

mod activity;
mod member;
mod news;
mod role;
mod testimonial;
mod user;

pub use activity::Activity;
pub use member::Member;
pub use news::News;
pub use role::Role;
pub use testimonial::Testimonial;
pub use user::{normalize_email, User};
