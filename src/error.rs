use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::store::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
}

/// Errors surfaced by the services and rendered by the HTTP layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid original url")]
    InvalidOriginalUrl,

    #[error("invalid short name")]
    InvalidShortCode,

    #[error("invalid id")]
    InvalidId,

    #[error("invalid range")]
    InvalidRange,

    #[error("short name already used")]
    ShortNameAlreadyUsed,

    #[error("not found")]
    NotFound,

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidOriginalUrl
            | AppError::InvalidShortCode
            | AppError::InvalidId
            | AppError::InvalidRange
            | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::ShortNameAlreadyUsed => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidOriginalUrl => "invalid_original_url",
            AppError::InvalidShortCode => "invalid_short_code",
            AppError::InvalidId => "invalid_id",
            AppError::InvalidRange => "invalid_range",
            AppError::ShortNameAlreadyUsed => "short_name_already_used",
            AppError::NotFound => "not_found",
            AppError::MalformedBody(_) => "malformed_body",
            AppError::StoreUnavailable(_) => "store_unavailable",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side causes stay in the log.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UniqueViolation => AppError::ShortNameAlreadyUsed,
            StoreError::NotFound => AppError::NotFound,
            StoreError::Unavailable(e) => AppError::StoreUnavailable(e.to_string()),
            StoreError::Query(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Request fields with a dedicated error, checked in order.
const FIELD_ERRORS: &[(&str, fn() -> AppError)] = &[
    ("original_url", || AppError::InvalidOriginalUrl),
    ("short_name", || AppError::InvalidShortCode),
];

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors.errors();

        FIELD_ERRORS
            .iter()
            .find(|(field, _)| fields.contains_key(*field))
            .map(|(_, to_error)| to_error())
            .unwrap_or_else(|| AppError::MalformedBody(errors.to_string()))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}
