//! Activity service

use ngo_core::entities::Activity;
use ngo_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{ActivityRequest, ActivityResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Activity service
pub struct ActivityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActivityService<'a> {
    /// Create a new ActivityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a new activity
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn save(&self, request: ActivityRequest) -> ServiceResult<ActivityResponse> {
        let activity = Activity::new(request.name, request.content, request.image);
        let created = self.ctx.activity_repo().create(&activity).await?;

        info!(activity_id = created.id, "Activity created");

        Ok(ActivityResponse::from(&created))
    }

    /// Replace the fields of an existing activity
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: ActivityRequest) -> ServiceResult<ActivityResponse> {
        let mut activity = self
            .ctx
            .activity_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ActivityNotFound(id))?;

        activity.apply(request.name, request.content, request.image);
        self.ctx.activity_repo().update(&activity).await?;

        info!(activity_id = id, "Activity updated");

        Ok(ActivityResponse::from(&activity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support;

    fn request(name: &str) -> ActivityRequest {
        ActivityRequest {
            name: name.to_string(),
            content: "Weekly tutoring".to_string(),
            image: "http://img/tutoring.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_and_update() {
        let ctx = test_support::context();
        let service = ActivityService::new(&ctx);

        let saved = service.save(request("Tutoring")).await.unwrap();
        let updated = service.update(saved.id, request("Math tutoring")).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.name, "Math tutoring");
        assert_eq!(updated.created_at, saved.created_at);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let ctx = test_support::context();
        let err = ActivityService::new(&ctx)
            .update(3, request("Anything"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_ACTIVITY");
    }
}
