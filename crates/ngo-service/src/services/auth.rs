//! Authentication service
//!
//! Handles registration, login, bearer token resolution and the admin
//! role check.

use ngo_common::auth::{hash_password, validate_password_strength, verify_password};
use ngo_common::AppError;
use ngo_core::entities::{normalize_email, Role, User};
use ngo_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, RegisterRequest, RegisterResponse, TokenResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::user::UserService;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user with the default role
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        validate_password_strength(&request.password)?;
        let email = normalize_email(&request.email);

        // Soft-deleted users keep their email
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let role = UserService::new(self.ctx).get_role(Role::USER).await?;
        let password_hash = hash_password(&request.password)?;

        let mut user = User::new(request.first_name, request.last_name, email, role);
        user.photo = request.photo;
        let user = self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = user.id, "User registered successfully");

        let token = self.issue_token(&user)?;

        Ok(RegisterResponse {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            photo: user.photo,
            token,
        })
    }

    /// Exchange email and password for a token
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&normalize_email(&request.email))
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                AppError::InvalidCredentials
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&user.email)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                AppError::InvalidCredentials
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        info!(user_id = user.id, "User logged in successfully");

        Ok(TokenResponse {
            token: self.issue_token(&user)?,
        })
    }

    /// Resolve a bearer token to the active user it names
    ///
    /// Token failures are 401s; a valid token for a missing or deleted user
    /// is a 404.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.jwt_service().decode_token(token).map_err(|e| {
            warn!(error = %e, "Rejected bearer token");
            e
        })?;

        self.ctx
            .user_repo()
            .find_by_email(claims.email())
            .await?
            .ok_or_else(|| ServiceError::not_found("User", claims.email()))
    }

    /// Require the administrator role as currently stored
    pub fn ensure_admin(&self, user: &User) -> ServiceResult<()> {
        if user.is_admin() {
            Ok(())
        } else {
            warn!(user_id = user.id, role = %user.role.name, "Admin role required");
            Err(DomainError::MissingRole(Role::ADMIN.to_string()).into())
        }
    }

    /// Make sure an administrator with this email exists
    ///
    /// Returns `true` when the account was created and `false` when an active
    /// administrator already holds the email. Any other account on that email
    /// is a configuration error, since the configured credentials would not
    /// grant admin access.
    #[instrument(skip(self, password))]
    pub async fn bootstrap_admin(&self, email: &str, password: &str) -> ServiceResult<bool> {
        let email = normalize_email(email);

        match self.ctx.user_repo().find_by_email(&email).await? {
            Some(user) if user.is_admin() => return Ok(false),
            Some(user) => {
                return Err(AppError::Config(format!(
                    "admin email {email} belongs to user {} with role {}",
                    user.id, user.role.name
                ))
                .into());
            }
            None if self.ctx.user_repo().email_exists(&email).await? => {
                return Err(AppError::Config(format!(
                    "admin email {email} belongs to a deleted user"
                ))
                .into());
            }
            None => {}
        }

        validate_password_strength(password)?;
        let role = UserService::new(self.ctx).get_role(Role::ADMIN).await?;
        let password_hash = hash_password(password)?;

        let user = User::new("Admin".to_string(), "Admin".to_string(), email, role);
        let user = self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = user.id, "Administrator account created");

        Ok(true)
    }

    fn issue_token(&self, user: &User) -> ServiceResult<String> {
        Ok(self.ctx.jwt_service().issue(&user.email, &user.role.name)?)
    }
}
