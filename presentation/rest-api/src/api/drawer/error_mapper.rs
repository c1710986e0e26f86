use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::drawer::errors::DrawerError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for DrawerError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            DrawerError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("InternalError", "repository.storage")),
            ),
        }
    }
}
