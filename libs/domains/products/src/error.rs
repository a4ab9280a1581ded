use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    #[error("No image for product: {0}")]
    ImageNotFound(i64),

    #[error("{0}")]
    MalformedBody(String),

    #[error(transparent)]
    Http(AppError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for the shared wire format
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ProductNotFound(id) => {
                AppError::NotFound(format!("Product {} not found", id))
            }
            CatalogError::ImageNotFound(product_id) => {
                AppError::NotFound(format!("Image for product {} not found", product_id))
            }
            CatalogError::MalformedBody(msg) => AppError::BadRequest(msg),
            CatalogError::Http(err) => err,
        }
    }
}

/// Decode failures from `axum_helpers::decode_json` become `MalformedBody`;
/// anything else keeps its own status.
impl From<AppError> for CatalogError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::MalformedJson(e) => CatalogError::MalformedBody(e.to_string()),
            AppError::BadRequest(msg) => CatalogError::MalformedBody(msg),
            other => CatalogError::Http(other),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_decode_failure_is_bad_request() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let catalog_error = CatalogError::from(AppError::from(err));

        assert!(matches!(catalog_error, CatalogError::MalformedBody(_)));
        assert_eq!(catalog_error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_keeps_its_status() {
        let catalog_error = CatalogError::from(AppError::NotFound("Product 4".to_string()));

        assert!(matches!(catalog_error, CatalogError::Http(AppError::NotFound(_))));
        assert_eq!(catalog_error.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_missing_records_are_not_found() {
        assert_eq!(
            CatalogError::ProductNotFound(1).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::ImageNotFound(1).into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
