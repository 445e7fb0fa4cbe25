//! Pagination extractor
//!
//! Extracts the zero-based `page` query parameter.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PageParams {
    /// Zero-based page number
    #[serde(default)]
    pub page: Option<String>,
}

/// Validated page number, defaulting to the first page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery(pub u32);

impl TryFrom<PageParams> for PageQuery {
    type Error = ApiError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        match params.page {
            None => Ok(PageQuery::default()),
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map(PageQuery)
                .map_err(|_| ApiError::invalid_query("'page' must be a non-negative integer")),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        PageQuery::try_from(params)
    }
}
