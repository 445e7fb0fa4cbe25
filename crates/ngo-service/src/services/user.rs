//! User service
//!
//! Profile lookups and administrative user management.

use ngo_core::entities::Role;
use ngo_core::DomainError;
use tracing::{info, instrument};

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Profile of the authenticated principal
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, email: &str) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", email))?;

        Ok(UserResponse::from(user))
    }

    /// All active users
    #[instrument(skip(self))]
    pub async fn get_all_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get an active user by ID
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;

        Ok(UserResponse::from(user))
    }

    /// Soft delete a user
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.user_repo().delete(id).await?;

        info!(user_id = id, "User deleted");

        Ok(())
    }

    /// Resolve a role by name
    #[instrument(skip(self))]
    pub async fn get_role(&self, name: &str) -> ServiceResult<Role> {
        let role = self
            .ctx
            .role_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::RoleNotFound(name.to_string()))?;

        Ok(role)
    }
}
