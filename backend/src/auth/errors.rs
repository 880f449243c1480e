//! Custom error types specific to authentication failures.
//!
//! Missing or rejected bearer tokens answer 401 with a `WWW-Authenticate`
//! challenge, missing roles answer 403, and a verification backend that
//! cannot be reached answers 502.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use itm_adapters::AdapterError;
use thiserror::Error;

use super::models::Role;
use crate::errors::error_response;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid bearer token")]
    InvalidToken,

    #[error("role {0} required")]
    MissingRole(Role),

    #[error("token verification failed: {0}")]
    Verification(#[from] AdapterError),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::MissingToken | AuthError::InvalidToken => {
                let mut response = error_response(StatusCode::UNAUTHORIZED, self.to_string());
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                response
            }
            AuthError::MissingRole(_) => error_response(StatusCode::FORBIDDEN, self.to_string()),
            AuthError::Verification(err) => {
                tracing::error!(error = %err, "bearer token verification failed");
                error_response(StatusCode::BAD_GATEWAY, "token verification unavailable")
            }
        }
    }
}
