use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const NOT_FOUND_MESSAGE: &str = "File not found";

#[derive(Debug)]
pub enum AppError {
    /// Carries the status configured for missing files.
    NotFound(StatusCode),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(status) => (*status, NOT_FOUND_MESSAGE.to_string()),
            AppError::Internal(msg) => {
                // Log the real error server-side, return generic message to client
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}
