//! Member service
//!
//! Members are soft deleted, so a deleted member behaves as absent for
//! update and delete alike.

use ngo_core::entities::Member;
use ngo_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{MemberRequest, MemberResponse, PageResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a new member
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn save(&self, request: MemberRequest) -> ServiceResult<MemberResponse> {
        let mut member = Member::new(request.name, request.image);
        member.facebook_url = request.facebook_url;
        member.instagram_url = request.instagram_url;
        member.linkedin_url = request.linkedin_url;
        member.description = request.description;

        let created = self.ctx.member_repo().create(&member).await?;

        info!(member_id = created.id, "Member created");

        Ok(MemberResponse::from(created))
    }

    /// Replace the mutable fields of an active member
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: MemberRequest) -> ServiceResult<MemberResponse> {
        let mut member = self
            .ctx
            .member_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MemberNotFound(id))?;

        member.name = request.name;
        member.facebook_url = request.facebook_url;
        member.instagram_url = request.instagram_url;
        member.linkedin_url = request.linkedin_url;
        member.image = request.image;
        member.description = request.description;
        member.touch();

        self.ctx.member_repo().update(&member).await?;

        info!(member_id = id, "Member updated");

        Ok(MemberResponse::from(member))
    }

    /// Soft delete an active member
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.member_repo().delete(id).await?;

        info!(member_id = id, "Member deleted");

        Ok(())
    }

    /// List one page of active members
    #[instrument(skip(self))]
    pub async fn find_all_paged(
        &self,
        page: u32,
        base_path: &str,
    ) -> ServiceResult<PageResponse<MemberResponse>> {
        let page = self
            .ctx
            .member_repo()
            .find_page(self.ctx.page_request(page))
            .await?;

        Ok(PageResponse::from_page(page.map(MemberResponse::from), base_path))
    }
}
