use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("Product {id} version conflict: If-Match carried {expected:?}")]
    VersionConflict { id: i32, expected: Option<i32> },

    #[error("Product {0} was modified concurrently")]
    ConcurrentModification(i32),

    #[error("Store failed to apply change to product {0}")]
    StoreFailure(i32),

    #[error("Store error: {0}")]
    Store(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::VersionConflict { id, expected } => AppError::Conflict(match expected {
                Some(expected) => format!("Product {} does not match version {}", id, expected),
                None => format!("Product {} requires an If-Match header with its version", id),
            }),
            ProductError::ConcurrentModification(id) => AppError::Conflict(format!(
                "Product {} was modified concurrently, fetch it again and retry",
                id
            )),
            ProductError::StoreFailure(id) => {
                AppError::InternalServerError(format!("Failed to persist product {}", id))
            }
            ProductError::Store(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
