//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in ngo-core.

mod activity;
mod error;
mod member;
mod news;
mod role;
mod testimonial;
mod user;

pub use activity::PgActivityRepository;
pub use member::PgMemberRepository;
pub use news::PgNewsRepository;
pub use role::PgRoleRepository;
pub use testimonial::PgTestimonialRepository;
pub use user::PgUserRepository;
