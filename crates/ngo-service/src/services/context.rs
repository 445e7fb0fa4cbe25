//! Service context - dependency container for services

use std::sync::Arc;

use ngo_common::auth::JwtService;
use ngo_core::traits::{
    ActivityRepository, MemberRepository, NewsRepository, RoleRepository, TestimonialRepository,
    UserRepository,
};
use ngo_core::PageRequest;
use ngo_db::{
    InMemoryActivityRepository, InMemoryMemberRepository, InMemoryNewsRepository,
    InMemoryRoleRepository, InMemoryTestimonialRepository, InMemoryUserRepository,
    PgActivityRepository, PgMemberRepository, PgNewsRepository, PgPool, PgRoleRepository,
    PgTestimonialRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Built once at startup and shared read-only by every request.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent when running on in-memory repositories
    pool: Option<PgPool>,

    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    testimonial_repo: Arc<dyn TestimonialRepository>,
    news_repo: Arc<dyn NewsRepository>,
    activity_repo: Arc<dyn ActivityRepository>,
    user_repo: Arc<dyn UserRepository>,
    role_repo: Arc<dyn RoleRepository>,

    // Services
    jwt_service: Arc<JwtService>,

    page_size: u32,
}

impl ServiceContext {
    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    pub fn testimonial_repo(&self) -> &dyn TestimonialRepository {
        self.testimonial_repo.as_ref()
    }

    pub fn news_repo(&self) -> &dyn NewsRepository {
        self.news_repo.as_ref()
    }

    pub fn activity_repo(&self) -> &dyn ActivityRepository {
        self.activity_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn role_repo(&self) -> &dyn RoleRepository {
        self.role_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Page request for a zero-based page number
    pub fn page_request(&self, page: u32) -> PageRequest {
        PageRequest::new(page, self.page_size)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    testimonial_repo: Option<Arc<dyn TestimonialRepository>>,
    news_repo: Option<Arc<dyn NewsRepository>>,
    activity_repo: Option<Arc<dyn ActivityRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    role_repo: Option<Arc<dyn RoleRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    page_size: u32,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            member_repo: None,
            testimonial_repo: None,
            news_repo: None,
            activity_repo: None,
            user_repo: None,
            role_repo: None,
            jwt_service: None,
            page_size: PageRequest::DEFAULT_SIZE,
        }
    }

    /// Wire every repository to PostgreSQL through `pool`
    pub fn postgres(pool: PgPool) -> Self {
        Self::new()
            .member_repo(Arc::new(PgMemberRepository::new(pool.clone())))
            .testimonial_repo(Arc::new(PgTestimonialRepository::new(pool.clone())))
            .news_repo(Arc::new(PgNewsRepository::new(pool.clone())))
            .activity_repo(Arc::new(PgActivityRepository::new(pool.clone())))
            .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
            .role_repo(Arc::new(PgRoleRepository::new(pool.clone())))
            .pool(pool)
    }

    /// Wire every repository to a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new()
            .member_repo(Arc::new(InMemoryMemberRepository::new()))
            .testimonial_repo(Arc::new(InMemoryTestimonialRepository::new()))
            .news_repo(Arc::new(InMemoryNewsRepository::new()))
            .activity_repo(Arc::new(InMemoryActivityRepository::new()))
            .user_repo(Arc::new(InMemoryUserRepository::new()))
            .role_repo(Arc::new(InMemoryRoleRepository::new()))
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn testimonial_repo(mut self, repo: Arc<dyn TestimonialRepository>) -> Self {
        self.testimonial_repo = Some(repo);
        self
    }

    pub fn news_repo(mut self, repo: Arc<dyn NewsRepository>) -> Self {
        self.news_repo = Some(repo);
        self
    }

    pub fn activity_repo(mut self, repo: Arc<dyn ActivityRepository>) -> Self {
        self.activity_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn role_repo(mut self, repo: Arc<dyn RoleRepository>) -> Self {
        self.role_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Build the ServiceContext
    ///
    /// Fails with `ServiceError::Validation` naming the first missing dependency.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: self.pool,
            member_repo: required(self.member_repo, "member_repo")?,
            testimonial_repo: required(self.testimonial_repo, "testimonial_repo")?,
            news_repo: required(self.news_repo, "news_repo")?,
            activity_repo: required(self.activity_repo, "activity_repo")?,
            user_repo: required(self.user_repo, "user_repo")?,
            role_repo: required(self.role_repo, "role_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            page_size: self.page_size,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
