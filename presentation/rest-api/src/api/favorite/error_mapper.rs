use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::favorite::errors::FavoriteError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FavoriteError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            // Lookups made on behalf of the favorites page keep the catalog's mapping.
            FavoriteError::RecipeLookup(err) => err.into_error_response(),
            FavoriteError::MalformedData(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    name: "InternalError".to_string(),
                    message: "favorite.malformed_data".to_string(),
                }),
            ),
            FavoriteError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    name: "InternalError".to_string(),
                    message: "repository.persistence".to_string(),
                }),
            ),
        }
    }
}
