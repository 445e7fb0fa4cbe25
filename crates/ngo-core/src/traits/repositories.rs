//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer states what it needs; `ngo-db` provides the PostgreSQL
//! and in-memory implementations. Soft-deleted rows never come back from
//! any lookup, listing or count.

use async_trait::async_trait;

use crate::entities::{Activity, Member, News, Role, Testimonial, User};
use crate::error::DomainError;
use crate::value_objects::{Page, PageRequest};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find an active member by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>>;

    /// List active members ordered by ID
    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Member>>;

    /// Insert a member, returning it with the assigned ID
    async fn create(&self, member: &Member) -> RepoResult<Member>;

    /// Overwrite the mutable fields of an active member
    async fn update(&self, member: &Member) -> RepoResult<()>;

    /// Soft delete an active member
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Testimonial Repository
// ============================================================================

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// Find testimonial by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Testimonial>>;

    /// List testimonials ordered by ID
    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Testimonial>>;

    /// Insert a testimonial, returning it with the assigned ID
    async fn create(&self, testimonial: &Testimonial) -> RepoResult<Testimonial>;

    /// Overwrite the mutable fields of a testimonial
    async fn update(&self, testimonial: &Testimonial) -> RepoResult<()>;

    /// Permanently remove a testimonial
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// News Repository
// ============================================================================

#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Find news by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<News>>;

    /// Insert news. Fails with `CategoryNotFound` for an unknown category.
    async fn create(&self, news: &News) -> RepoResult<News>;
}

// ============================================================================
// Activity Repository
// ============================================================================

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Find activity by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Activity>>;

    /// Insert an activity, returning it with the assigned ID
    async fn create(&self, activity: &Activity) -> RepoResult<Activity>;

    /// Overwrite the mutable fields of an activity
    async fn update(&self, activity: &Activity) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an active user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find an active user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List all active users ordered by ID
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Check if email is taken, counting soft-deleted users too
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user, returning it with the assigned ID
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<User>;

    /// Soft delete an active user
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Get password hash of an active user for authentication
    async fn get_password_hash(&self, email: &str) -> RepoResult<Option<String>>;
}

// ============================================================================
// Role Repository
// ============================================================================

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find role by its name, e.g. `ROLE_ADMIN`
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Role>>;
}
