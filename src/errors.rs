use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::api::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("booking API error: {0}")]
    Api(#[from] ApiError),

    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error("another submission is already in progress")]
    SubmissionInFlight,

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Api(_) => StatusCode::BAD_GATEWAY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::SubmissionInFlight => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
