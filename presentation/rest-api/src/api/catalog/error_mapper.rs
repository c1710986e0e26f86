use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CatalogError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "catalog.product_not_found",
            ),
            CatalogError::FetchFailed => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "catalog.fetch_failed",
            ),
            CatalogError::InvalidPayload => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "catalog.invalid_payload",
            ),
            CatalogError::InvalidEndpoint => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ConfigurationError",
                "catalog.invalid_endpoint",
            ),
            CatalogError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.storage",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
