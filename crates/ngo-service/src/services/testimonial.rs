//! Testimonial service

use ngo_core::entities::Testimonial;
use ngo_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{PageResponse, TestimonialRequest, TestimonialResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Testimonial service
pub struct TestimonialService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TestimonialService<'a> {
    /// Create a new TestimonialService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a new testimonial
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn save(&self, request: TestimonialRequest) -> ServiceResult<TestimonialResponse> {
        let testimonial = Testimonial::new(request.name, request.image, request.content);
        let created = self.ctx.testimonial_repo().create(&testimonial).await?;

        info!(testimonial_id = created.id, "Testimonial created");

        Ok(TestimonialResponse::from(created))
    }

    /// Replace the mutable fields of an existing testimonial
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i64,
        request: TestimonialRequest,
    ) -> ServiceResult<TestimonialResponse> {
        let mut testimonial = self
            .ctx
            .testimonial_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TestimonialNotFound(id))?;

        testimonial.apply(request.name, request.image, request.content);
        self.ctx.testimonial_repo().update(&testimonial).await?;

        info!(testimonial_id = id, "Testimonial updated");

        Ok(TestimonialResponse::from(testimonial))
    }

    /// Permanently delete a testimonial
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.testimonial_repo().delete(id).await?;

        info!(testimonial_id = id, "Testimonial deleted");

        Ok(())
    }

    /// List one page of testimonials
    #[instrument(skip(self))]
    pub async fn find_all_paged(
        &self,
        page: u32,
        base_path: &str,
    ) -> ServiceResult<PageResponse<TestimonialResponse>> {
        let page = self
            .ctx
            .testimonial_repo()
            .find_page(self.ctx.page_request(page))
            .await?;

        Ok(PageResponse::from_page(page.map(TestimonialResponse::from), base_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support;

    fn request(name: &str) -> TestimonialRequest {
        TestimonialRequest {
            name: name.to_string(),
            image: format!("http://img/{name}.png"),
            content: None,
        }
    }

    #[tokio::test]
    async fn test_save_then_lookup() {
        let ctx = test_support::context();
        let service = TestimonialService::new(&ctx);

        let saved = service.save(request("Jane")).await.unwrap();
        let found = ctx.testimonial_repo().find_by_id(saved.id).await.unwrap().unwrap();

        assert_eq!(found.name, "Jane");
        assert_eq!(found.image, "http://img/Jane.png");
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let ctx = test_support::context();
        let service = TestimonialService::new(&ctx);
        let saved = service.save(request("Jane")).await.unwrap();

        let mut changed = request("Janet");
        changed.content = Some("Great people".to_string());
        let updated = service.update(saved.id, changed).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.name, "Janet");
        assert_eq!(updated.content.as_deref(), Some("Great people"));
        assert!(updated.updated_at >= saved.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let ctx = test_support::context();
        let err = TestimonialService::new(&ctx)
            .update(42, request("Jane"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_delete_is_permanent() {
        let ctx = test_support::context();
        let service = TestimonialService::new(&ctx);
        let saved = service.save(request("Jane")).await.unwrap();

        service.delete(saved.id).await.unwrap();

        assert_eq!(service.delete(saved.id).await.unwrap_err().status_code(), 404);
    }

    #[tokio::test]
    async fn test_paging() {
        let ctx = test_support::context();
        let service = TestimonialService::new(&ctx);
        for name in ["Ana", "Bea", "Cid", "Dan", "Eva", "Fer", "Gus", "Hal", "Ian", "Jo", "Kim"] {
            service.save(request(name)).await.unwrap();
        }

        let first = service.find_all_paged(0, "/testimonials").await.unwrap();
        assert_eq!(first.content.len(), 10);
        assert_eq!(first.total_elements, 11);
        assert_eq!(first.next_page.as_deref(), Some("/testimonials?page=1"));

        let second = service.find_all_paged(1, "/testimonials").await.unwrap();
        assert_eq!(second.content.len(), 1);
        assert_eq!(second.content[0].name, "Kim");
        assert!(second.next_page.is_none());

        let beyond = service.find_all_paged(5, "/testimonials").await.unwrap();
        assert!(beyond.content.is_empty());
    }
}
