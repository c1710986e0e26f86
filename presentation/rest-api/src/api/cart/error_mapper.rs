use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::ProductNotInCatalog => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "cart.product_not_in_catalog",
            ),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.storage",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
