//! Activity handlers

use axum::{extract::State, Json};
use ngo_service::dto::{ActivityRequest, ActivityResponse};
use ngo_service::ActivityService;

use crate::extractors::{IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create an activity
///
/// POST /activities
pub async fn create_activity(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ActivityRequest>,
) -> ApiResult<Created<Json<ActivityResponse>>> {
    let service = ActivityService::new(state.service_context());
    let response = service.save(request).await?;
    Ok(Created(Json(response)))
}

/// Replace an activity's fields
///
/// PUT /activities/{id}
pub async fn update_activity(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<ActivityRequest>,
) -> ApiResult<Json<ActivityResponse>> {
    let service = ActivityService::new(state.service_context());
    let response = service.update(id, request).await?;
    Ok(Json(response))
}
