//! PostgreSQL implementation of TestimonialRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ngo_core::entities::Testimonial;
use ngo_core::error::DomainError;
use ngo_core::traits::{RepoResult, TestimonialRepository};
use ngo_core::value_objects::{Page, PageRequest};

use crate::models::TestimonialModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TestimonialRepository
#[derive(Clone)]
pub struct PgTestimonialRepository {
    pool: PgPool,
}

impl PgTestimonialRepository {
    /// Create a new PgTestimonialRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestimonialRepository for PgTestimonialRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Testimonial>> {
        let result = sqlx::query_as::<_, TestimonialModel>(
            r"
            SELECT id, name, image, content, created_at, updated_at
            FROM testimonials
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Testimonial::from))
    }

    #[instrument(skip(self))]
    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Testimonial>> {
        let rows = sqlx::query_as::<_, TestimonialModel>(
            r"
            SELECT id, name, image, content, created_at, updated_at
            FROM testimonials
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM testimonials")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(Testimonial::from).collect(),
            request,
            total,
        ))
    }

    #[instrument(skip(self, testimonial), fields(name = %testimonial.name))]
    async fn create(&self, testimonial: &Testimonial) -> RepoResult<Testimonial> {
        let row = sqlx::query_as::<_, TestimonialModel>(
            r"
            INSERT INTO testimonials (name, image, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, image, content, created_at, updated_at
            ",
        )
        .bind(&testimonial.name)
        .bind(&testimonial.image)
        .bind(&testimonial.content)
        .bind(testimonial.created_at)
        .bind(testimonial.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Testimonial::from(row))
    }

    #[instrument(skip(self, testimonial), fields(id = testimonial.id))]
    async fn update(&self, testimonial: &Testimonial) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE testimonials
            SET name = $2, image = $3, content = $4, updated_at = $5
            WHERE id = $1
            ",
        )
        .bind(testimonial.id)
        .bind(&testimonial.name)
        .bind(&testimonial.image)
        .bind(&testimonial.content)
        .bind(testimonial.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TestimonialNotFound(testimonial.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TestimonialNotFound(id));
        }

        Ok(())
    }
}
