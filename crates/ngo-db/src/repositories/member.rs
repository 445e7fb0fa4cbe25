//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ngo_core::entities::Member;
use ngo_core::error::DomainError;
use ngo_core::traits::{MemberRepository, RepoResult};
use ngo_core::value_objects::{Page, PageRequest};

use crate::models::MemberModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, facebook_url, instagram_url, linkedin_url, image, description,
                   deleted, created_at, updated_at
            FROM members
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Member>> {
        let rows = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, facebook_url, instagram_url, linkedin_url, image, description,
                   deleted, created_at, updated_at
            FROM members
            WHERE deleted = FALSE
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM members WHERE deleted = FALSE
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(Member::from).collect(),
            request,
            total,
        ))
    }

    #[instrument(skip(self, member), fields(name = %member.name))]
    async fn create(&self, member: &Member) -> RepoResult<Member> {
        let row = sqlx::query_as::<_, MemberModel>(
            r"
            INSERT INTO members (name, facebook_url, instagram_url, linkedin_url, image,
                                 description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, facebook_url, instagram_url, linkedin_url, image, description,
                      deleted, created_at, updated_at
            ",
        )
        .bind(&member.name)
        .bind(&member.facebook_url)
        .bind(&member.instagram_url)
        .bind(&member.linkedin_url)
        .bind(&member.image)
        .bind(&member.description)
        .bind(member.created_at)
        .bind(member.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Member::from(row))
    }

    #[instrument(skip(self, member), fields(id = member.id))]
    async fn update(&self, member: &Member) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE members
            SET name = $2, facebook_url = $3, instagram_url = $4, linkedin_url = $5,
                image = $6, description = $7, updated_at = $8
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(member.id)
        .bind(&member.name)
        .bind(&member.facebook_url)
        .bind(&member.instagram_url)
        .bind(&member.linkedin_url)
        .bind(&member.image)
        .bind(&member.description)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MemberNotFound(member.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE members
            SET deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND deleted = FALSE
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MemberNotFound(id));
        }

        Ok(())
    }
}
