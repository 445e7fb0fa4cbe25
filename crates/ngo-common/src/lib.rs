//! # ngo-common
//!
//! Shared utilities including configuration, error handling, authentication,
//! the localized message catalog and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod i18n;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, validate_password_strength, verify_password, Claims, JwtService};
pub use config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    I18nConfig, JwtConfig, PaginationConfig, RateLimitConfig, ServerConfig,
};
pub use error::AppError;
pub use i18n::{Locale, MessageSource};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
