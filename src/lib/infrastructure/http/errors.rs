//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::contact::errors::{FieldViolation, SendMessageError, ValidationError};

/// An error response envelope
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false` for errors
    #[schema(example = false)]
    pub success: bool,

    /// The error message
    #[schema(example = "Invalid form data")]
    pub message: String,

    /// Per-field violation details, present for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub errors: Option<Vec<FieldViolation>>,
}

/// An error raised in the API
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApiError {
    /// The status code
    #[schema(example = 500, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    #[schema(example = "Internal server error")]
    pub message: String,

    /// Per-field violation details, present for validation failures
    #[schema(value_type = Option<Vec<Object>>)]
    pub errors: Option<Vec<FieldViolation>>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
            errors: None,
        }
    }

    /// Create a new bad request error
    pub fn new_400(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create a new not found error
    pub fn new_404(message: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Create a new method not allowed error
    pub fn new_405(message: &str) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Attach per-field violation details
    pub fn with_errors(mut self, errors: Vec<FieldViolation>) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                success: false,
                message: self.message,
                errors: self.errors,
            }),
        )
            .into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new_400("Invalid form data").with_errors(err.violations)
    }
}

impl From<SendMessageError> for ApiError {
    fn from(err: SendMessageError) -> Self {
        match err {
            // The config message names environment keys only, never values,
            // so it is safe to return to the caller.
            SendMessageError::Config(cause) => {
                error!("contact dispatch rejected: {cause}");
                ApiError::new_500(&cause.to_string())
            }
            SendMessageError::Transport(cause) => {
                error!("mail transport verification failed: {cause}");
                ApiError::new_500("Email service is not configured correctly. Please try again later.")
            }
            SendMessageError::Send(cause) => {
                error!("failed to send contact email: {cause}");
                ApiError::new_500("Failed to send message. Please try again later.")
            }
            SendMessageError::UnknownError(cause) => {
                error!("contact dispatch failed: {cause:#}");
                ApiError::new_500("Failed to send message. Please try again later.")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new_400("Invalid form data")
            .with_errors(vec![FieldViolation::new("body", &rejection.body_text())])
    }
}
