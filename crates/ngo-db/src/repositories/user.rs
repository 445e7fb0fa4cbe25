//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ngo_core::entities::User;
use ngo_core::error::DomainError;
use ngo_core::traits::{RepoResult, UserRepository};

use crate::models::UserWithRoleModel;

use super::error::{map_db_error, map_foreign_key_violation, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserWithRoleModel>(
            r"
            SELECT u.id, u.first_name, u.last_name, u.email, u.photo, u.deleted,
                   u.created_at, u.updated_at,
                   r.id AS role_id, r.name AS role_name, r.description AS role_description
            FROM users u
            JOIN roles r ON r.id = u.role_id
            WHERE u.id = $1 AND u.deleted = FALSE
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserWithRoleModel>(
            r"
            SELECT u.id, u.first_name, u.last_name, u.email, u.photo, u.deleted,
                   u.created_at, u.updated_at,
                   r.id AS role_id, r.name AS role_name, r.description AS role_description
            FROM users u
            JOIN roles r ON r.id = u.role_id
            WHERE u.email = $1 AND u.deleted = FALSE
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserWithRoleModel>(
            r"
            SELECT u.id, u.first_name, u.last_name, u.email, u.photo, u.deleted,
                   u.created_at, u.updated_at,
                   r.id AS role_id, r.name AS role_name, r.description AS role_description
            FROM users u
            JOIN roles r ON r.id = u.role_id
            WHERE u.deleted = FALSE
            ORDER BY u.id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        // Deleted users keep their email reserved
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, user, password_hash), fields(email = %user.email))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<User> {
        let role_name = user.role.name.clone();
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO users (first_name, last_name, email, password_hash, photo, role_id,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            ",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(password_hash)
        .bind(&user.photo)
        .bind(user.role.id)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let unknown_role = e
                .as_database_error()
                .is_some_and(|db| db.is_foreign_key_violation());
            if unknown_role {
                map_foreign_key_violation(e, || DomainError::RoleNotFound(role_name))
            } else {
                map_unique_violation(e, || DomainError::EmailAlreadyExists)
            }
        })?;

        Ok(User { id, ..user.clone() })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id.to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, email: &str) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM users WHERE email = $1 AND deleted = FALSE",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
