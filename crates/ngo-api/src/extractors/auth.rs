//! Authentication extractors
//!
//! Resolve the bearer token to the active user it names. A missing or
//! malformed `Authorization` header is rejected before any handler runs.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use ngo_common::AppError;
use ngo_core::entities::User;
use ngo_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user loaded from the database
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    if rejection.is_missing() {
                        ApiError::MissingAuth
                    } else {
                        tracing::warn!("Malformed authorization header");
                        ApiError::App(AppError::InvalidToken)
                    }
                })?;

        let app_state = AppState::from_ref(state);
        let user = AuthService::new(app_state.service_context())
            .authenticate(bearer.token())
            .await?;

        Ok(AuthUser { user })
    }
}

/// Authenticated user whose current role is `ROLE_ADMIN`
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user: User,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser { user } = AuthUser::from_request_parts(parts, state).await?;

        let app_state = AppState::from_ref(state);
        AuthService::new(app_state.service_context()).ensure_admin(&user)?;

        Ok(AdminUser { user })
    }
}
