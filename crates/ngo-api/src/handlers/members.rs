//! Member handlers

use axum::{extract::State, Json};
use ngo_service::dto::{MemberRequest, MemberResponse, MessageResponse, PageResponse};
use ngo_service::MemberService;

use crate::extractors::{IdPath, PageQuery, RequestLocale, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

const BASE_PATH: &str = "/members";

/// Create a member
///
/// POST /members
pub async fn create_member(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    ValidatedJson(request): ValidatedJson<MemberRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let member = MemberService::new(state.service_context())
        .save(request)
        .await?;

    let message = state
        .messages()
        .get("member.created.successfully", &[&member.name], locale);
    Ok(Created(Json(MessageResponse::new(message))))
}

/// Replace an active member's fields
///
/// PUT /members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<MemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(Json(response))
}

/// Soft delete a member
///
/// DELETE /members/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    MemberService::new(state.service_context()).delete(id).await?;

    let message = state
        .messages()
        .get("member.delete.ok", &[&id.to_string()], locale);
    Ok(Json(MessageResponse::new(message)))
}

/// Page through active members
///
/// GET /members?page=N
pub async fn get_members(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let response = service.find_all_paged(page, BASE_PATH).await?;
    Ok(Json(response))
}
