//! News service

use ngo_core::entities::News;
use ngo_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{NewsRequest, NewsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// News service
pub struct NewsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NewsService<'a> {
    /// Create a new NewsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish news under an existing category
    #[instrument(skip(self, request), fields(category_id = request.category_id))]
    pub async fn save(&self, request: NewsRequest) -> ServiceResult<NewsResponse> {
        let news = News::new(request.name, request.content, request.image, request.category_id);
        let created = self.ctx.news_repo().create(&news).await?;

        info!(news_id = created.id, "News created");

        Ok(NewsResponse::from(&created))
    }

    /// Get news by ID
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> ServiceResult<NewsResponse> {
        let news = self
            .ctx
            .news_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NewsNotFound(id))?;

        Ok(NewsResponse::from(&news))
    }
}
