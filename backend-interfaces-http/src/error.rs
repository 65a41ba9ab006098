use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use backend_application::AppError;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        match &value {
            AppError::NotFound(_) => HttpError::NotFound(value.to_string()),
            AppError::InvalidInput(_)
            | AppError::InvalidState(_)
            | AppError::SoldOut(_)
            | AppError::AlreadyFinalized => HttpError::BadRequest(value.to_string()),
            AppError::Misconfigured(_)
            | AppError::UpstreamUnavailable(_)
            | AppError::MintFailed(_)
            | AppError::Inconsistent(_) => HttpError::Internal(value.to_string()),
            AppError::Internal(err) => {
                tracing::error!("unhandled application error: {err:#}");
                HttpError::Internal("an unexpected error occurred on the server".to_string())
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
