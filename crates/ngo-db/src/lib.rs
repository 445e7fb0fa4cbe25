//! # ngo-db
//!
//! Database layer implementing the `ngo-core` repository traits.
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repositories
//! - In-memory repositories with the same semantics, for tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ngo_db::pool::{create_pool, PoolConfig};
//! use ngo_db::repositories::PgMemberRepository;
//!
//! async fn example() -> Result<(), sqlx::Error> {
//!     let pool = create_pool(&PoolConfig::new("postgres://localhost/ngo")).await?;
//!     ngo_db::schema::apply(&pool).await?;
//!     let members = PgMemberRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use memory::{
    InMemoryActivityRepository, InMemoryMemberRepository, InMemoryNewsRepository,
    InMemoryRoleRepository, InMemoryTestimonialRepository, InMemoryUserRepository,
};
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{
    PgActivityRepository, PgMemberRepository, PgNewsRepository, PgRoleRepository,
    PgTestimonialRepository, PgUserRepository,
};
