//! Testimonial handlers

use axum::{extract::State, Json};
use ngo_service::dto::{MessageResponse, PageResponse, TestimonialRequest, TestimonialResponse};
use ngo_service::TestimonialService;

use crate::extractors::{IdPath, PageQuery, RequestLocale, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

const BASE_PATH: &str = "/testimonials";

/// Create a testimonial
///
/// POST /testimonials
pub async fn create_testimonial(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    ValidatedJson(request): ValidatedJson<TestimonialRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let testimonial = TestimonialService::new(state.service_context())
        .save(request)
        .await?;

    let message = state
        .messages()
        .get("testimonial.created.successfully", &[&testimonial.name], locale);
    Ok(Created(Json(MessageResponse::new(message))))
}

/// Replace a testimonial's fields
///
/// PUT /testimonials/{id}
pub async fn update_testimonial(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<TestimonialRequest>,
) -> ApiResult<Json<TestimonialResponse>> {
    let service = TestimonialService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(Json(response))
}

/// Permanently delete a testimonial
///
/// DELETE /testimonials/{id}
pub async fn delete_testimonial(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    TestimonialService::new(state.service_context())
        .delete(id)
        .await?;

    let message = state
        .messages()
        .get("testimonial.delete.ok", &[&id.to_string()], locale);
    Ok(Json(MessageResponse::new(message)))
}

/// Page through testimonials
///
/// GET /testimonials?page=N
pub async fn get_testimonials(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
) -> ApiResult<Json<PageResponse<TestimonialResponse>>> {
    let service = TestimonialService::new(state.service_context());
    let response = service.find_all_paged(page, BASE_PATH).await?;
    Ok(Json(response))
}
