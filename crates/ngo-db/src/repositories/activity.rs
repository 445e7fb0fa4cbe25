//! PostgreSQL implementation of ActivityRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ngo_core::entities::Activity;
use ngo_core::error::DomainError;
use ngo_core::traits::{ActivityRepository, RepoResult};

use crate::models::ActivityModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ActivityRepository
#[derive(Clone)]
pub struct PgActivityRepository {
    pool: PgPool,
}

impl PgActivityRepository {
    /// Create a new PgActivityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PgActivityRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Activity>> {
        let result = sqlx::query_as::<_, ActivityModel>(
            r"
            SELECT id, name, content, image, created_at, updated_at
            FROM activities
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Activity::from))
    }

    #[instrument(skip(self, activity), fields(name = %activity.name))]
    async fn create(&self, activity: &Activity) -> RepoResult<Activity> {
        let row = sqlx::query_as::<_, ActivityModel>(
            r"
            INSERT INTO activities (name, content, image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, content, image, created_at, updated_at
            ",
        )
        .bind(&activity.name)
        .bind(&activity.content)
        .bind(&activity.image)
        .bind(activity.created_at)
        .bind(activity.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Activity::from(row))
    }

    #[instrument(skip(self, activity), fields(id = activity.id))]
    async fn update(&self, activity: &Activity) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE activities
            SET name = $2, content = $3, image = $4, updated_at = $5
            WHERE id = $1
            ",
        )
        .bind(activity.id)
        .bind(&activity.name)
        .bind(&activity.content)
        .bind(&activity.image)
        .bind(activity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ActivityNotFound(activity.id));
        }

        Ok(())
    }
}
