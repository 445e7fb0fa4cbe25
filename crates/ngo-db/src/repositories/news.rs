//! PostgreSQL implementation of NewsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ngo_core::entities::News;
use ngo_core::error::DomainError;
use ngo_core::traits::{NewsRepository, RepoResult};

use crate::models::NewsModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of NewsRepository
#[derive(Clone)]
pub struct PgNewsRepository {
    pool: PgPool,
}

impl PgNewsRepository {
    /// Create a new PgNewsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsRepository for PgNewsRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<News>> {
        let result = sqlx::query_as::<_, NewsModel>(
            r"
            SELECT id, name, content, image, category_id, created_at, updated_at
            FROM news
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(News::from))
    }

    #[instrument(skip(self, news), fields(category_id = news.category_id))]
    async fn create(&self, news: &News) -> RepoResult<News> {
        let category_id = news.category_id;
        let row = sqlx::query_as::<_, NewsModel>(
            r"
            INSERT INTO news (name, content, image, category_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, content, image, category_id, created_at, updated_at
            ",
        )
        .bind(&news.name)
        .bind(&news.content)
        .bind(&news.image)
        .bind(category_id)
        .bind(news.created_at)
        .bind(news.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::CategoryNotFound(category_id)))?;

        Ok(News::from(row))
    }
}
