use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RecipeError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "recipe.not_found"),
            RecipeError::EmptyQuery => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.empty_query",
            ),
            RecipeError::FetchFailed => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "recipe.fetch_failed",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
