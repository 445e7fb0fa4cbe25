//! PostgreSQL implementation of RoleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ngo_core::entities::Role;
use ngo_core::traits::{RepoResult, RoleRepository};

use crate::models::RoleModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RoleRepository
#[derive(Clone)]
pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    /// Create a new PgRoleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Role>> {
        let result = sqlx::query_as::<_, RoleModel>(
            "SELECT id, name, description FROM roles WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Role::from))
    }
}
