//! User administration handlers

use axum::{extract::State, Json};
use ngo_service::dto::{MessageResponse, UserResponse};
use ngo_service::UserService;

use crate::extractors::{AdminUser, IdPath, RequestLocale};
use crate::response::ApiResult;
use crate::state::AppState;

/// List all active users
///
/// GET /auth/users
pub async fn get_all_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.get_all_users().await?;
    Ok(Json(users))
}

/// Get an active user by ID
///
/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::new(state.service_context()).find_by_id(id).await?;
    Ok(Json(user))
}

/// Soft delete a user
///
/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    RequestLocale(locale): RequestLocale,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    UserService::new(state.service_context()).delete(id).await?;

    let message = state
        .messages()
        .get("user.delete.ok", &[&id.to_string()], locale);
    Ok(Json(MessageResponse::new(message)))
}
