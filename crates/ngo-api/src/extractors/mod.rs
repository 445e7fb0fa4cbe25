//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, paths, pagination and
//! locale negotiation.

mod auth;
mod locale;
mod pagination;
mod path;
mod validated;

pub use auth::{AdminUser, AuthUser};
pub use locale::RequestLocale;
pub use pagination::{PageParams, PageQuery};
pub use path::IdPath;
pub use validated::ValidatedJson;
