//! Path and query extractors whose rejections use the API error format

use axum::{
    extract::{FromRequestParts, Path as AxumPath, Query as AxumQuery},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Wrapper around `axum::extract::Query`
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

/// Wrapper around `axum::extract::Path`
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(value)) => Ok(Query(value)),
            Err(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Failed to parse query string");

                Err(ApiError::bad_request(rejection.body_text()).with_code("query_parse_error"))
            }
        }
    }
}

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumPath::<T>::from_request_parts(parts, state).await {
            Ok(AxumPath(value)) => Ok(Path(value)),
            Err(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Failed to parse path");

                Err(ApiError::bad_request(rejection.body_text()).with_code("path_parse_error"))
            }
        }
    }
}
