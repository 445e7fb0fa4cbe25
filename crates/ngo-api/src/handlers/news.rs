//! News handlers

use axum::{extract::State, Json};
use ngo_service::dto::{NewsRequest, NewsResponse};
use ngo_service::NewsService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Publish a news item
///
/// POST /news
pub async fn create_news(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<NewsRequest>,
) -> ApiResult<Created<Json<NewsResponse>>> {
    let service = NewsService::new(state.service_context());
    let response = service.save(request).await?;
    Ok(Created(Json(response)))
}

/// Get a news item
///
/// GET /news/{id}
pub async fn get_news(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<NewsResponse>> {
    let service = NewsService::new(state.service_context());
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}
