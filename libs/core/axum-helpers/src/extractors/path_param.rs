//! Path parameter extractor that rejects with the standard JSON error body.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Extractor for typed path parameters.
///
/// Behaves like [`Path`], but a parameter that fails to parse (e.g. `abc`
/// for an integer id) is rejected as [`AppError::BadRequest`] instead of
/// axum's plain-text rejection.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::PathParam;
///
/// async fn get_product(PathParam(id): PathParam<i32>) -> String {
///     format!("Product ID: {}", id)
/// }
///
/// let app = Router::new().route("/product/{id}", get(get_product));
/// ```
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::BadRequest(format!("Invalid path parameter: {}", e.body_text()))
                    .into_response()
            })?;

        Ok(PathParam(value))
    }
}
