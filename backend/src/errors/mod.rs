//! Global application error types and handlers.
//!
//! This module defines the error type returned by the API handlers and the
//! JSON body every error response shares, so failures from the identity
//! provider and from authentication are formatted the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use itm_adapters::AdapterError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        status: status.as_u16(),
        error: status.canonical_reason().unwrap_or("Error").to_string(),
        message: message.into(),
    };
    (status, Json(body)).into_response()
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("identity provider request failed: {0}")]
    Upstream(AdapterError),
}

impl From<AdapterError> for ApiError {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AdapterError::Conflict(_) => ApiError::Conflict(err.to_string()),
            other => ApiError::Upstream(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => error_response(StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => error_response(StatusCode::CONFLICT, message),
            ApiError::Upstream(err) => {
                tracing::error!(error = %err, "identity provider request failed");
                error_response(StatusCode::BAD_GATEWAY, "identity provider request failed")
            }
        }
    }
}
