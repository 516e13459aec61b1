//! Error responses for the HTTP surface.

use crate::domain::FieldErrors;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Message returned for any storage failure. Driver detail is only logged.
pub const STORAGE_FAILURE_MESSAGE: &str = "server/database error. please try again later.";

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    errors: Option<FieldErrors>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            errors: None,
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    /// 400 carrying the field -> message map of a rejected record.
    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "validation failed".to_string(),
            errors: Some(errors),
        }
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error)
    }

    pub fn internal(error: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self.error,
            errors: self.errors,
        };
        (self.status, Json(payload)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
